mod response_consumer;
mod response_stream;
mod source_stream;
mod subscription_handle;
mod subscription_hub;

pub use response_consumer::ChannelConsumer;
pub use response_consumer::ConsumerError;
pub use response_consumer::ResponseConsumer;
pub use response_stream::ResponseStream;
pub use source_stream::SourceStream;
pub use subscription_handle::SubscriptionHandle;
pub(crate) use subscription_hub::SubscriptionHub;

#[cfg(test)]
mod tests;
