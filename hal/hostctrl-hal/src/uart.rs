//! UART serial communication abstractions
//!
//! The host link is polled: the receive side never blocks, it either has a
//! byte ready or it does not.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Take one received byte if the receiver has one ready
    ///
    /// Returns `Ok(None)` when nothing is pending. Must not block.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Drain up to `buf.len()` pending bytes without blocking
    ///
    /// Returns the number of bytes written to `buf`.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut n = 0;
        while n < buf.len() {
            match self.try_read_byte()? {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}
