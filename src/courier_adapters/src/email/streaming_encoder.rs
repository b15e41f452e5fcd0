//! JSON encoding that feeds an HTTP body while it is being produced.
//!
//! The encoder runs on the blocking pool and pushes fixed-size chunks through a
//! bounded channel. The consuming [`EncodedStream`] ends once the producer has
//! dropped its side of the channel, so a finished or failed encode can never
//! leave the consumer waiting.

use std::{
    future::Future,
    io::{self, Write},
    pin::Pin,
    task::{Context, Poll, ready},
};

use bytes::Bytes;
use futures::Stream;
use serde::Serialize;
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};

pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 8;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Encoding failed: {0}")]
    Serialize(String),
    #[error("Encoder stopped before finishing: {0}")]
    ProducerAborted(String),
}

/// Serializes values to JSON as a stream of byte chunks
#[derive(Debug, Clone, Copy)]
pub struct StreamingEncoder {
    chunk_size: usize,
    capacity: usize,
}

impl Default for StreamingEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHANNEL_CAPACITY)
    }
}

impl StreamingEncoder {
    pub fn new(chunk_size: usize, capacity: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            capacity: capacity.max(1),
        }
    }

    /// Start encoding `value` in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn encode<T>(&self, value: T) -> EncodedStream
    where
        T: Serialize + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(self.capacity);
        let chunk_size = self.chunk_size;

        let producer = tokio::task::spawn_blocking(move || {
            let mut writer = ChannelWriter::new(tx, chunk_size);
            let outcome = serde_json::to_writer(&mut writer, &value)
                .and_then(|()| writer.flush().map_err(serde_json::Error::io));

            if let Err(e) = outcome {
                tracing::warn!(error = %e, "Streaming encode failed");
                // The consumer may already be gone, nothing left to tell it then
                let _ = writer
                    .tx
                    .blocking_send(Err(EncodeError::Serialize(e.to_string())));
            }
        });

        EncodedStream {
            rx,
            producer: Some(producer),
        }
    }
}

/// Single-shot counterpart of [`StreamingEncoder::encode`]
pub fn encode_to_vec<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodeError> {
    serde_json::to_vec(value).map_err(|e| EncodeError::Serialize(e.to_string()))
}

/// Consuming end of a [`StreamingEncoder`].
///
/// Yields chunks in the order they were written. Ends after the first error,
/// or with [`EncodeError::ProducerAborted`] if the producer died without
/// reporting one.
pub struct EncodedStream {
    rx: mpsc::Receiver<Result<Bytes, EncodeError>>,
    producer: Option<JoinHandle<()>>,
}

impl EncodedStream {
    fn finish(&mut self) {
        self.rx.close();
        self.producer = None;
    }
}

impl Stream for EncodedStream {
    type Item = Result<Bytes, EncodeError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.producer.is_none() {
            return Poll::Ready(None);
        }

        match ready!(this.rx.poll_recv(cx)) {
            Some(Ok(chunk)) => Poll::Ready(Some(Ok(chunk))),
            Some(Err(e)) => {
                this.finish();
                Poll::Ready(Some(Err(e)))
            }
            None => {
                let Some(producer) = this.producer.as_mut() else {
                    return Poll::Ready(None);
                };
                let joined = ready!(Pin::new(producer).poll(cx));
                this.producer = None;

                match joined {
                    Ok(()) => Poll::Ready(None),
                    Err(e) => Poll::Ready(Some(Err(EncodeError::ProducerAborted(e.to_string())))),
                }
            }
        }
    }
}

/// Buffers writes and hands them to the channel in chunks
struct ChannelWriter {
    tx: mpsc::Sender<Result<Bytes, EncodeError>>,
    buf: Vec<u8>,
    chunk_size: usize,
}

impl ChannelWriter {
    fn new(tx: mpsc::Sender<Result<Bytes, EncodeError>>, chunk_size: usize) -> Self {
        Self {
            tx,
            buf: Vec::with_capacity(chunk_size),
            chunk_size,
        }
    }

    fn send_buffered(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }

        let chunk = std::mem::replace(&mut self.buf, Vec::with_capacity(self.chunk_size));
        self.tx
            .blocking_send(Ok(Bytes::from(chunk)))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "stream consumer went away"))
    }
}

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        if self.buf.len() >= self.chunk_size {
            self.send_buffered()?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send_buffered()
    }
}
