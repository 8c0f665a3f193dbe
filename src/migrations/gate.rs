use std::io::{self, BufRead, StdinLock};

use crate::errors::MigrationError;

/// Blocks until the operator signals that the next migration may be shown.
pub trait OperatorGate {
    fn wait(&mut self) -> Result<(), MigrationError>;
}

impl<G: OperatorGate + ?Sized> OperatorGate for &mut G {
    fn wait(&mut self) -> Result<(), MigrationError> {
        (**self).wait()
    }
}

/// Waits for one line of input. The line itself is discarded and there is no
/// timeout. End of input is an error: nobody is left to confirm the next step.
pub struct LineGate<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineGate<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl LineGate<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> OperatorGate for LineGate<R> {
    fn wait(&mut self) -> Result<(), MigrationError> {
        // Raw bytes: a non UTF-8 keystroke is still a keypress.
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(MigrationError::Input)?;

        if read == 0 {
            return Err(MigrationError::Input(io::ErrorKind::UnexpectedEof.into()));
        }
        Ok(())
    }
}
