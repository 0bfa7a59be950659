use std::fmt;

/// The first field of a data row.  Rows with equal ids are collapsed
/// together; comparison is exact and case-sensitive.
#[derive(Debug, PartialEq, Clone, PartialOrd, Ord, Eq)]
pub struct RowId(pub String);
impl From<String> for RowId {
    fn from(x: String) -> RowId {
        RowId(x)
    }
}
impl From<&str> for RowId {
    fn from(x: &str) -> RowId {
        RowId(x.to_string())
    }
}
impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl AsRef<str> for RowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
