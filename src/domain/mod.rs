pub mod source;
pub mod entry;
pub mod article;
pub mod message;

pub use source::Source;
pub use entry::RawEntry;
pub use article::Article;
pub use message::ArticleMessage;
