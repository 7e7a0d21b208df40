use super::{Compiler, Diagnostic, Output, Request};

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Bounds the time spent in another compiler.
///
/// The wrapped compiler runs on its own thread. When it does not answer in
/// time the call fails with an error diagnostic; the thread is left to finish
/// on its own and its output is discarded.
#[derive(Debug)]
pub struct Timeout<C> {
    inner: Arc<C>,
    limit: Duration,
}

impl<C> Timeout<C> {
    pub fn new(inner: C, limit: Duration) -> Timeout<C> {
        Timeout {
            inner: Arc::new(inner),
            limit,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<C: Compiler + 'static> Compiler for Timeout<C> {
    fn compile(&self, request: &Request) -> Output {
        let (tx, rx) = mpsc::sync_channel(1);
        let inner = self.inner.clone();
        let request = request.clone();

        let spawned = thread::Builder::new()
            .name("polygen-compile".to_string())
            .spawn(move || {
                // The receiver is gone once the limit has passed.
                let _ = tx.send(inner.compile(&request));
            });

        if let Err(err) = spawned {
            let error = Diagnostic::error(format!("failed to start compilation: {err}"));
            return Output::failed(vec![error]);
        }

        match rx.recv_timeout(self.limit) {
            Ok(output) => output,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let limit_ms = self.limit.as_millis();
                warn!(limit_ms = limit_ms as u64, "compilation timed out");

                let error = Diagnostic::error(format!("compilation timed out after {limit_ms} ms"));
                Output::failed(vec![error])
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                let error = Diagnostic::error("compiler stopped without producing output");
                Output::failed(vec![error])
            }
        }
    }
}
