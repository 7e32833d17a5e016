use crate::core::errors::ExchangeError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread::JoinHandle;
use tokio::runtime::{Builder, Handle};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Background event loop driving non-blocking requests
///
/// Owns one OS thread running a single-threaded tokio runtime. Work handed
/// to [`EventLoop::spawn`] runs cooperatively on that thread while the
/// caller keeps a [`Pending`] handle. Stopping the loop (explicitly or by
/// dropping it) drops every unfinished task; their handles then resolve to
/// the output type's default value.
pub struct EventLoop {
    name: String,
    handle: Handle,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLoop")
            .field("name", &self.name)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl EventLoop {
    /// Start a loop on a new thread
    pub fn start(name: impl Into<String>) -> Result<Self, ExchangeError> {
        let name = name.into();
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ExchangeError::EventLoopError(format!("Failed to build runtime: {}", e)))?;
        let handle = runtime.handle().clone();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread_name = name.clone();
        let thread = std::thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                runtime.block_on(async {
                    // sender dropped or signalled, either way we are done
                    let _ = shutdown_rx.await;
                });
                debug!(event_loop = %thread_name, "event loop stopped");
            })
            .map_err(|e| ExchangeError::EventLoopError(format!("Failed to spawn thread: {}", e)))?;

        debug!(event_loop = %name, "event loop started");

        Ok(Self {
            name,
            handle,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    /// Runtime handle for tasks that should run on this loop
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn is_running(&self) -> bool {
        self.thread
            .as_ref()
            .is_some_and(|thread| !thread.is_finished())
    }

    /// Schedule `future` on the loop and return immediately
    pub fn spawn<F>(&self, future: F) -> Pending<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Default + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.handle.spawn(async move {
            // receiver may already be gone, nothing to report then
            let _ = tx.send(future.await);
        });
        Pending { rx: Some(rx) }
    }

    /// Stop the loop and wait for its thread to exit
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!(event_loop = %self.name, "event loop thread panicked");
            }
        }
    }
}

impl Drop for EventLoop {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}

/// Handle to a request running on an [`EventLoop`]
///
/// Await it from async code or call [`Pending::wait`] from a plain thread.
/// If the loop stops before the work finishes, the handle resolves to
/// `T::default()`. Polling a handle that already produced its value (after
/// awaiting it through `&mut`) yields `T::default()` instead of panicking.
#[derive(Debug)]
#[must_use = "a Pending handle does nothing unless waited on or awaited"]
pub struct Pending<T> {
    rx: Option<oneshot::Receiver<T>>,
}

impl<T: Default> Pending<T> {
    /// Block the current thread until the result is available
    ///
    /// Panics if called from within an async execution context; await the
    /// handle there instead.
    pub fn wait(mut self) -> T {
        match self.rx.take() {
            Some(rx) => rx.blocking_recv().unwrap_or_else(|_| stopped()),
            None => spent(),
        }
    }

    /// Take the result if it is already available
    ///
    /// Consumes the handle once the request has finished; hands it back
    /// untouched while the request is still in flight.
    pub fn try_take(mut self) -> Result<T, Self> {
        let Some(rx) = self.rx.as_mut() else {
            return Ok(spent());
        };
        match rx.try_recv() {
            Ok(value) => Ok(value),
            Err(oneshot::error::TryRecvError::Empty) => Err(self),
            Err(oneshot::error::TryRecvError::Closed) => Ok(stopped()),
        }
    }
}

impl<T: Default> Future for Pending<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let Some(rx) = self.rx.as_mut() else {
            return Poll::Ready(spent());
        };
        let result = std::task::ready!(Pin::new(rx).poll(cx));
        self.rx = None;
        Poll::Ready(result.unwrap_or_else(|_| stopped()))
    }
}

fn stopped<T: Default>() -> T {
    warn!("event loop stopped before the request completed");
    T::default()
}

fn spent<T: Default>() -> T {
    warn!("pending handle already produced its value");
    T::default()
}
