//! Streaming preview session over partial markup.
//!
//! Chat-style callers receive markup token-by-token and re-render after every
//! chunk. While the stream is live the renderable view is the accumulated
//! source with synthetic closes appended; once the stream ends the raw source
//! is used directly.
//!
//! Each completion pass is a fresh scan of the full source (the driver keeps
//! no resumable state); the session only caches the last completed view so
//! repeated reads between chunks cost nothing.

pub mod chunker;

#[cfg(test)]
mod streaming_parity;

use markup::complete_into;

#[derive(Debug)]
pub struct PreviewSession {
    source: String,
    completed: String,
    stale: bool,
    streaming: bool,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self {
            source: String::new(),
            completed: String::new(),
            stale: false,
            streaming: true,
        }
    }

    /// Append a chunk of streamed source text.
    pub fn push_str(&mut self, chunk: &str) {
        if chunk.is_empty() {
            return;
        }
        self.source.push_str(chunk);
        self.stale = true;
    }

    /// Raw accumulated text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Mark the stream ended; from here the raw source is rendered directly.
    pub fn finish(&mut self) {
        self.streaming = false;
    }

    /// The markup to hand to the renderer right now.
    pub fn renderable(&mut self) -> &str {
        if !self.streaming {
            return &self.source;
        }
        if self.stale {
            self.completed.clear();
            complete_into(&self.source, &mut self.completed);
            self.stale = false;
            log::trace!(
                target: "preview.session",
                "recompleted {} source bytes into {} renderable bytes",
                self.source.len(),
                self.completed.len()
            );
        }
        &self.completed
    }
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self::new()
    }
}
