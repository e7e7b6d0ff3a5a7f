use crate::execution::Response;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConsumerError {
    #[error("The consumer's response channel is closed")]
    ChannelClosed,

    #[error("{0}")]
    Message(String),
}

/// Receives the response computed for each event of a subscription.
pub trait ResponseConsumer: Send + Sync {
    fn consume(&self, response: Response) -> Result<(), ConsumerError>;
}
impl<F> ResponseConsumer for F
where
    F: Fn(Response) -> Result<(), ConsumerError> + Send + Sync,
{
    fn consume(&self, response: Response) -> Result<(), ConsumerError> {
        self(response)
    }
}

/// Forwards subscription responses into an unbounded [`mpsc`] channel.
#[derive(Clone, Debug)]
pub struct ChannelConsumer {
    sender: mpsc::UnboundedSender<Response>,
}
impl ChannelConsumer {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Response>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}
impl ResponseConsumer for ChannelConsumer {
    fn consume(&self, response: Response) -> Result<(), ConsumerError> {
        self.sender.send(response).map_err(|_| ConsumerError::ChannelClosed)
    }
}
