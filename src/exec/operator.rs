//! Pull-based operator protocol.
//!
//! Every pipeline stage is driven through [`Operator`]. Concrete stages only
//! implement [`Producer`]; wrapping one in [`Lookahead`] supplies the
//! lifecycle checks and the one-row lookahead buffer, and keeps
//! `Producer::fetch_next` out of reach of callers.

use crate::{
    db_trace,
    debugger::Component,
    exec::errors::{ExecResult, ExecutionError},
    types::{row::Row, schema::Schema},
};

pub trait Operator {
    /// Opens this operator and, transitively, its children.
    fn open(&mut self) -> ExecResult<()>;

    /// Closes this operator and its children. Closing a closed operator does nothing.
    fn close(&mut self);

    /// Restarts the stream from the beginning.
    fn rewind(&mut self) -> ExecResult<()> {
        self.close();
        self.open()
    }

    /// Whether another row is available. Does not consume it.
    fn has_next(&mut self) -> ExecResult<bool>;

    /// Returns the next row, failing with `NoSuchElement` at end of stream.
    fn next_row(&mut self) -> ExecResult<Row>;

    fn schema(&self) -> &Schema;
}

impl<O: Operator + ?Sized> Operator for Box<O> {
    fn open(&mut self) -> ExecResult<()> {
        (**self).open()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn rewind(&mut self) -> ExecResult<()> {
        (**self).rewind()
    }

    fn has_next(&mut self) -> ExecResult<bool> {
        (**self).has_next()
    }

    fn next_row(&mut self) -> ExecResult<Row> {
        (**self).next_row()
    }

    fn schema(&self) -> &Schema {
        (**self).schema()
    }
}

/// Operator-specific behaviour behind the [`Operator`] protocol.
pub trait Producer {
    /// Short name used in errors and logs.
    fn name(&self) -> &'static str;

    fn schema(&self) -> &Schema;

    /// Prepares per-run state and opens children.
    fn on_open(&mut self) -> ExecResult<()>;

    /// Releases per-run state and closes children.
    fn on_close(&mut self);

    /// Produces the next row, or `None` once exhausted.
    ///
    /// Only called between `on_open` and `on_close`.
    fn fetch_next(&mut self) -> ExecResult<Option<Row>>;

    fn into_operator(self) -> Lookahead<Self>
    where
        Self: Sized,
    {
        Lookahead::new(self)
    }
}

/// Drives a [`Producer`] through the open/close lifecycle with a single
/// buffered row.
pub struct Lookahead<P> {
    producer: P,
    open: bool,
    next: Option<Row>,
}

impl<P: Producer> Lookahead<P> {
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            open: false,
            next: None,
        }
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn boxed(self) -> Box<dyn Operator>
    where
        P: 'static,
    {
        Box::new(self)
    }

    fn ensure_open(&self) -> ExecResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(ExecutionError::IllegalState {
                operator: self.producer.name(),
                reason: "operator is not open",
            })
        }
    }
}

impl<P: Producer> Operator for Lookahead<P> {
    fn open(&mut self) -> ExecResult<()> {
        if self.open {
            return Err(ExecutionError::IllegalState {
                operator: self.producer.name(),
                reason: "operator is already open",
            });
        }

        self.producer.on_open()?;
        self.next = None;
        self.open = true;
        db_trace!(Component::Exec, "opened {}", self.producer.name());
        Ok(())
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }

        self.next = None;
        self.producer.on_close();
        self.open = false;
        db_trace!(Component::Exec, "closed {}", self.producer.name());
    }

    fn has_next(&mut self) -> ExecResult<bool> {
        self.ensure_open()?;

        if self.next.is_none() {
            self.next = self.producer.fetch_next()?;
        }
        Ok(self.next.is_some())
    }

    fn next_row(&mut self) -> ExecResult<Row> {
        if !self.has_next()? {
            return Err(ExecutionError::NoSuchElement {
                operator: self.producer.name(),
            });
        }

        self.next.take().ok_or(ExecutionError::NoSuchElement {
            operator: self.producer.name(),
        })
    }

    fn schema(&self) -> &Schema {
        self.producer.schema()
    }
}
