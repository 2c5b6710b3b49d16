use tokio::sync::broadcast;

use crate::event::SearchEvent;

#[derive(Clone)]
pub struct SearchBus {
    sender: broadcast::Sender<SearchEvent>,
}

impl SearchBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SearchEvent> {
        self.sender.subscribe()
    }

    pub fn publish(
        &self,
        event: SearchEvent,
    ) -> Result<usize, broadcast::error::SendError<SearchEvent>> {
        self.sender.send(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::StateChangedPayload;
    use crate::types::SessionState;
    use tokio::time::{timeout, Duration};

    fn test_event() -> SearchEvent {
        SearchEvent::StateChanged(StateChangedPayload {
            state: SessionState::Running,
        })
    }

    #[tokio::test]
    async fn publish_and_receive_event() {
        let bus = SearchBus::new(8);
        let mut rx = bus.subscribe();

        let _ = bus.publish(test_event());

        let received = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("recv");
        assert!(
            matches!(received, SearchEvent::StateChanged(ref e) if e.state == SessionState::Running)
        );
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_event() {
        let bus = SearchBus::new(8);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let _ = bus.publish(test_event());

        let event1 = rx1.recv().await.expect("recv1");
        let event2 = rx2.recv().await.expect("recv2");

        assert!(matches!(event1, SearchEvent::StateChanged(_)));
        assert!(matches!(event2, SearchEvent::StateChanged(_)));
    }
}
