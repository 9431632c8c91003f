//! Command byte queue for `no_std` environments.
//!
//! The console transport (a USB serial interrupt, a host reader thread)
//! pushes raw bytes; the frame scheduler pops at most one per loop iteration.
//! Built on `critical-section` and `heapless::Deque`, so pushing from an
//! interrupt while the main loop pops is safe.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub u8);

/// Bounded queue of pending command bytes.
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the transport side.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get a receiver handle for the scheduler.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    fn try_send(&self, byte: u8) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of bytes waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport side of a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue one byte.
    ///
    /// Returns `Err(TrySendError(byte))` if the queue is full.
    pub fn try_send(&self, byte: u8) -> Result<(), TrySendError> {
        self.channel.try_send(byte)
    }

    /// Queue as many bytes of `input` as fit.
    ///
    /// Returns the number of bytes accepted; the rest are dropped.
    pub fn send_str(&self, input: &str) -> usize {
        input
            .bytes()
            .take_while(|byte| self.try_send(*byte).is_ok())
            .count()
    }
}

/// Scheduler side of a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the oldest pending byte, if any.
    pub fn try_receive(&self) -> Option<u8> {
        self.channel.try_receive()
    }
}
