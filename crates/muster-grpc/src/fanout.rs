// ABOUTME: Fan-out of one upstream gRPC stream to many subscribers.
// ABOUTME: Reference-counted subscriptions; upstream is cancelled when the last one drops.

use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_util::sync::CancellationToken;
use tonic::Status;

/// Default buffer size for the broadcast channel behind a fan-out.
pub const DEFAULT_FANOUT_BUFFER: usize = 64;

struct FanoutShared {
    subscribers: AtomicUsize,
    cancel: CancellationToken,
}

/// Fan a single upstream stream out to any number of subscribers.
///
/// One reader task pumps the upstream into a broadcast channel and owns the
/// only sender, so subscribers see end-of-stream as soon as the task exits.
/// The returned subscription is the first subscriber; further subscribers
/// attach through [`FanoutSubscription::subscribe`] without touching the
/// upstream. When the last subscription drops, the reader task is cancelled
/// and the upstream stream is dropped, which for a tonic
/// [`Streaming`](tonic::Streaming) cancels the underlying RPC.
///
/// An upstream error is delivered to every subscriber and terminates the
/// fan-out; upstream end-of-stream ends every subscription cleanly.
pub fn fanout<S, T>(upstream: S, buffer: usize) -> FanoutSubscription<T>
where
    S: Stream<Item = Result<T, Status>> + Send + Unpin + 'static,
    T: Clone + Send + 'static,
{
    let (tx, rx) = broadcast::channel(buffer);
    let cancel = CancellationToken::new();
    let shared = Arc::new(FanoutShared {
        subscribers: AtomicUsize::new(0),
        cancel: cancel.clone(),
    });

    let mut upstream = upstream;
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("last subscriber detached, cancelling upstream stream");
                    break;
                }
                item = upstream.next() => match item {
                    Some(Ok(value)) => {
                        // Send fails only when no receiver currently exists;
                        // the subscriber count decides the stream's lifetime,
                        // so keep pumping until cancelled.
                        let _ = tx.send(Ok(value));
                    }
                    Some(Err(status)) => {
                        tracing::debug!(status = %status, "upstream stream error, terminating fan-out");
                        let _ = tx.send(Err(status));
                        break;
                    }
                    None => {
                        tracing::debug!("upstream stream ended");
                        break;
                    }
                }
            }
        }
    });

    FanoutSubscription::attach(shared, rx)
}

/// One subscriber's handle onto a fanned-out stream.
///
/// Yields every item broadcast after the subscription was created. A
/// subscriber that falls more than the buffer size behind skips the missed
/// items (logged at warn) rather than stalling the others.
pub struct FanoutSubscription<T: Clone + Send + 'static> {
    rx: BroadcastStream<Result<T, Status>>,
    // Unpolled receiver kept only to mint new subscriptions.
    seed: broadcast::Receiver<Result<T, Status>>,
    shared: Arc<FanoutShared>,
}

impl<T: Clone + Send + 'static> FanoutSubscription<T> {
    fn attach(shared: Arc<FanoutShared>, rx: broadcast::Receiver<Result<T, Status>>) -> Self {
        shared.subscribers.fetch_add(1, Ordering::AcqRel);
        let seed = rx.resubscribe();
        Self {
            rx: BroadcastStream::new(rx),
            seed,
            shared,
        }
    }

    /// Attach another independent subscriber to the same upstream stream.
    ///
    /// The new subscriber sees items broadcast from this point on.
    pub fn subscribe(&self) -> Self {
        Self::attach(Arc::clone(&self.shared), self.seed.resubscribe())
    }

    /// Number of live subscriptions on this fan-out.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.load(Ordering::Acquire)
    }

    /// Receive the next item, or None once the stream has ended.
    pub async fn recv(&mut self) -> Option<Result<T, Status>> {
        self.next().await
    }
}

impl<T: Clone + Send + 'static> Stream for FanoutSubscription<T> {
    type Item = Result<T, Status>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match futures::ready!(Pin::new(&mut this.rx).poll_next(cx)) {
                Some(Ok(item)) => return Poll::Ready(Some(item)),
                Some(Err(BroadcastStreamRecvError::Lagged(missed))) => {
                    tracing::warn!(missed, "fan-out subscriber lagging, skipped items");
                    continue;
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<T: Clone + Send + 'static> Drop for FanoutSubscription<T> {
    fn drop(&mut self) {
        if self.shared.subscribers.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.shared.cancel.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio_stream::wrappers::ReceiverStream;

    /// Upstream wrapper that counts how many times it has been dropped.
    struct DropProbe<S> {
        inner: S,
        drops: Arc<AtomicUsize>,
    }

    impl<S: Stream + Unpin> Stream for DropProbe<S> {
        type Item = S::Item;

        fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
            Pin::new(&mut self.get_mut().inner).poll_next(cx)
        }
    }

    impl<S> Drop for DropProbe<S> {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn test_upstream() -> (
        mpsc::Sender<Result<u32, Status>>,
        ReceiverStream<Result<u32, Status>>,
    ) {
        let (tx, rx) = mpsc::channel(16);
        (tx, ReceiverStream::new(rx))
    }

    async fn wait_for_drop(drops: &Arc<AtomicUsize>) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while drops.load(Ordering::SeqCst) == 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("upstream was not dropped in time");
    }

    #[tokio::test]
    async fn two_subscribers_both_receive_every_item() {
        let (tx, upstream) = test_upstream();
        let mut first = fanout(upstream, 8);
        let mut second = first.subscribe();
        assert_eq!(first.subscriber_count(), 2);

        tx.send(Ok(1)).await.unwrap();
        tx.send(Ok(2)).await.unwrap();

        assert_eq!(first.recv().await.unwrap().unwrap(), 1);
        assert_eq!(first.recv().await.unwrap().unwrap(), 2);
        assert_eq!(second.recv().await.unwrap().unwrap(), 1);
        assert_eq!(second.recv().await.unwrap().unwrap(), 2);
    }

    #[tokio::test]
    async fn late_subscriber_only_sees_later_items() {
        let (tx, upstream) = test_upstream();
        let mut first = fanout(upstream, 8);

        tx.send(Ok(1)).await.unwrap();
        assert_eq!(first.recv().await.unwrap().unwrap(), 1);

        let mut late = first.subscribe();
        tx.send(Ok(2)).await.unwrap();
        assert_eq!(late.recv().await.unwrap().unwrap(), 2);
    }

    #[tokio::test]
    async fn dropping_one_subscriber_keeps_the_other_delivering() {
        let (tx, upstream) = test_upstream();
        let mut first = fanout(upstream, 8);
        let second = first.subscribe();

        drop(second);
        assert_eq!(first.subscriber_count(), 1);

        tx.send(Ok(7)).await.unwrap();
        assert_eq!(first.recv().await.unwrap().unwrap(), 7);
    }

    #[tokio::test]
    async fn dropping_last_subscriber_drops_upstream_exactly_once() {
        let (tx, upstream) = test_upstream();
        let drops = Arc::new(AtomicUsize::new(0));
        let probe = DropProbe {
            inner: upstream,
            drops: Arc::clone(&drops),
        };

        let first = fanout(probe, 8);
        let second = first.subscribe();

        drop(first);
        // One subscriber left; the upstream must stay alive.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(drops.load(Ordering::SeqCst), 0);

        drop(second);
        wait_for_drop(&drops).await;
        assert_eq!(drops.load(Ordering::SeqCst), 1);

        // Sender sees the receiving side gone once the reader task exits.
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn upstream_end_terminates_all_subscribers() {
        let (tx, upstream) = test_upstream();
        let mut first = fanout(upstream, 8);
        let mut second = first.subscribe();

        tx.send(Ok(1)).await.unwrap();
        drop(tx);

        assert_eq!(first.recv().await.unwrap().unwrap(), 1);
        assert!(first.recv().await.is_none());
        assert_eq!(second.recv().await.unwrap().unwrap(), 1);
        assert!(second.recv().await.is_none());
    }

    #[tokio::test]
    async fn upstream_error_surfaces_to_every_subscriber() {
        let (tx, upstream) = test_upstream();
        let mut first = fanout(upstream, 8);
        let mut second = first.subscribe();

        tx.send(Err(Status::unavailable("gone"))).await.unwrap();

        let err = first.recv().await.unwrap().unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unavailable);
        let err = second.recv().await.unwrap().unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unavailable);

        // The error terminates the fan-out.
        assert!(first.recv().await.is_none());
    }

    #[tokio::test]
    async fn lagging_subscriber_skips_missed_items_and_recovers() {
        let (tx, upstream) = test_upstream();
        let mut sub = fanout(upstream, 2);

        for i in 1..=4u32 {
            tx.send(Ok(i)).await.unwrap();
        }
        // Give the reader task time to drain all four into the broadcast
        // buffer; the two oldest get overwritten.
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(sub.recv().await.unwrap().unwrap(), 3);
        assert_eq!(sub.recv().await.unwrap().unwrap(), 4);
    }
}
