use crate::error::{Result, VendingError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Insert,
    Buy,
    Refund,
    Status,
    Restock,
    SetCoins,
}

/// One row of a session script: `op, value, count`.
///
/// `insert` uses `value` as the denomination and `count` as the unit count
/// (count defaults to 1); `buy` uses `value` as the slot index; `refund`
/// and `status` take no arguments. The administrative ops `restock`
/// (slot, new stock) and `setcoins` (denomination, new count) overwrite
/// inventory the way the original service screen did.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Op {
    pub op: OpKind,
    pub value: Option<u32>,
    pub count: Option<u32>,
}

pub struct SessionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SessionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn ops(self) -> impl Iterator<Item = Result<Op>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "op, value, count\ninsert, 500, 2\nbuy, 3, \nrefund, , ";
        let ops: Vec<Op> = SessionReader::new(data.as_bytes())
            .ops()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(ops.len(), 3);
        assert_eq!(
            ops[0],
            Op {
                op: OpKind::Insert,
                value: Some(500),
                count: Some(2),
            }
        );
        assert_eq!(ops[1].op, OpKind::Buy);
        assert_eq!(ops[1].value, Some(3));
        assert_eq!(ops[2], Op { op: OpKind::Refund, value: None, count: None });
    }

    #[test]
    fn test_reader_malformed_op() {
        let data = "op, value, count\nsteal, 500, 1";
        let results: Vec<Result<Op>> = SessionReader::new(data.as_bytes()).ops().collect();
        assert!(results[0].is_err());
    }
}
