use crate::error::{decode_json, Result};
use crate::types::{Body, Timestamp};

/// Message content in whichever representation the queue provides natively
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueBody {
    Text(String),
    Binary(Body),
}

impl QueueBody {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            QueueBody::Text(text) => text.as_bytes(),
            QueueBody::Binary(bytes) => &bytes[..],
        }
    }

    /// The body as text, if it was delivered as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            QueueBody::Text(text) => Some(text),
            QueueBody::Binary(_) => None,
        }
    }
}

impl From<String> for QueueBody {
    fn from(text: String) -> Self {
        QueueBody::Text(text)
    }
}

impl From<&str> for QueueBody {
    fn from(text: &str) -> Self {
        QueueBody::Text(text.to_owned())
    }
}

impl From<Body> for QueueBody {
    fn from(bytes: Body) -> Self {
        QueueBody::Binary(bytes)
    }
}

impl From<Vec<u8>> for QueueBody {
    fn from(bytes: Vec<u8>) -> Self {
        QueueBody::Binary(Body::from(bytes))
    }
}

/// A read-only view over one dequeued message
pub trait QueueMessage {
    fn id(&self) -> Option<&str>;

    fn get_body(&self) -> QueueBody;

    /// Decode the message body as JSON
    ///
    /// Fails with [BindingError::MalformedContent](crate::BindingError::MalformedContent) when the
    /// body is not valid JSON.
    fn get_json(&self) -> Result<serde_json::Value> {
        decode_json(self.get_body().as_bytes())
    }

    /// How many times this message has been delivered
    fn dequeue_count(&self) -> Option<u32>;

    fn expiration_time(&self) -> Option<Timestamp>;

    fn insertion_time(&self) -> Option<Timestamp>;

    fn next_visible_time(&self) -> Option<Timestamp>;

    /// Token for acknowledging, deleting or extending this particular delivery
    fn pop_receipt(&self) -> Option<&str>;
}

/// A dequeued message as populated by the host
///
/// Every metadata field is independently optional; queues that do not track a field leave it unset.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    body: QueueBody,
    id: Option<String>,
    dequeue_count: Option<u32>,
    expiration_time: Option<Timestamp>,
    insertion_time: Option<Timestamp>,
    next_visible_time: Option<Timestamp>,
    pop_receipt: Option<String>,
}

impl Message {
    pub fn new<B: Into<QueueBody>>(body: B) -> Self {
        Message {
            body: body.into(),
            id: None,
            dequeue_count: None,
            expiration_time: None,
            insertion_time: None,
            next_visible_time: None,
            pop_receipt: None,
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_dequeue_count(mut self, count: u32) -> Self {
        self.dequeue_count = Some(count);
        self
    }

    pub fn with_expiration_time(mut self, time: Timestamp) -> Self {
        self.expiration_time = Some(time);
        self
    }

    pub fn with_insertion_time(mut self, time: Timestamp) -> Self {
        self.insertion_time = Some(time);
        self
    }

    pub fn with_next_visible_time(mut self, time: Timestamp) -> Self {
        self.next_visible_time = Some(time);
        self
    }

    pub fn with_pop_receipt<S: Into<String>>(mut self, receipt: S) -> Self {
        self.pop_receipt = Some(receipt.into());
        self
    }
}

impl QueueMessage for Message {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn get_body(&self) -> QueueBody {
        self.body.clone()
    }

    fn dequeue_count(&self) -> Option<u32> {
        self.dequeue_count
    }

    fn expiration_time(&self) -> Option<Timestamp> {
        self.expiration_time
    }

    fn insertion_time(&self) -> Option<Timestamp> {
        self.insertion_time
    }

    fn next_visible_time(&self) -> Option<Timestamp> {
        self.next_visible_time
    }

    fn pop_receipt(&self) -> Option<&str> {
        self.pop_receipt.as_deref()
    }
}
