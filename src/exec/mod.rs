pub mod delete;
pub mod errors;
pub mod operator;
pub mod scan;
#[cfg(test)]
pub mod test_util;
pub mod values;

pub use delete::{DeleteExec, DeleteState, DeleteStats};
pub use errors::{ExecResult, ExecutionError};
pub use operator::{Lookahead, Operator, Producer};
pub use scan::SeqScanExec;
pub use values::ValuesExec;

use crate::types::row::Row;

/// Opens `op`, pulls every row, and closes it again, also on error.
pub fn collect(op: &mut dyn Operator) -> ExecResult<Vec<Row>> {
    op.open()?;

    let mut rows = Vec::new();
    let result = loop {
        match op.has_next() {
            Ok(true) => match op.next_row() {
                Ok(row) => rows.push(row),
                Err(e) => break Err(e),
            },
            Ok(false) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    op.close();
    result.map(|()| rows)
}
