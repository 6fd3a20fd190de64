mod contacts;

pub use contacts::{
    BrevoClient, ChatLeadSink, ContactAttributes, ContactUpsert, LeadRecord, SinkError,
};
