use serde::{Deserialize, Serialize};
use std::fmt;

/// Store expense (laporan) categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Operasional,
    Listrik,
    Air,
    Pembelian,
    Lainnya,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Operasional => "operasional",
            ExpenseCategory::Listrik => "listrik",
            ExpenseCategory::Air => "air",
            ExpenseCategory::Pembelian => "pembelian",
            ExpenseCategory::Lainnya => "lainnya",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
