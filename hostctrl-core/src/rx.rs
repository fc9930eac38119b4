//! Interrupt-fed receive queue
//!
//! When bytes arrive by interrupt, the handler only copies the byte into a
//! short lock-free SPSC queue. Framing and dispatch stay in the polled task,
//! which drains the queue through [`QueuedRx`].

use core::convert::Infallible;

use heapless::spsc::{Consumer, Producer, Queue};

use hostctrl_hal::UartRx;

/// Receive queue storage; holds `N - 1` bytes
pub type RxQueue<const N: usize> = Queue<u8, N>;

/// Interrupt side of the receive queue
pub struct RxProducer<'a, const N: usize> {
    producer: Producer<'a, u8, N>,
    overruns: u32,
}

impl<'a, const N: usize> RxProducer<'a, N> {
    /// Wrap the producer half of a split [`RxQueue`]
    pub fn new(producer: Producer<'a, u8, N>) -> Self {
        Self {
            producer,
            overruns: 0,
        }
    }

    /// Store one received byte
    ///
    /// A full queue drops the byte; the framer recovers on the next frame.
    pub fn on_byte(&mut self, byte: u8) {
        if self.producer.enqueue(byte).is_err() {
            self.overruns = self.overruns.wrapping_add(1);
        }
    }

    /// Number of bytes dropped because the queue was full
    pub fn overruns(&self) -> u32 {
        self.overruns
    }
}

/// Task side of the receive queue
pub struct QueuedRx<'a, const N: usize> {
    consumer: Consumer<'a, u8, N>,
}

impl<'a, const N: usize> QueuedRx<'a, N> {
    /// Wrap the consumer half of a split [`RxQueue`]
    pub fn new(consumer: Consumer<'a, u8, N>) -> Self {
        Self { consumer }
    }

    /// Bytes waiting to be read
    pub fn pending(&self) -> usize {
        self.consumer.len()
    }
}

impl<'a, const N: usize> UartRx for QueuedRx<'a, N> {
    type Error = Infallible;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Infallible> {
        Ok(self.consumer.dequeue())
    }
}
