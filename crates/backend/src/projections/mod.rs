pub mod p901_karyawan_catalog;
