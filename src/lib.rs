pub mod config;
pub mod error;
pub mod message;
pub mod screen;
pub mod services;
pub mod state;

pub use config::ClientConfig;
pub use error::{ClientError, SubmitRejected};
pub use message::{ChatRequest, ChatResponse, Language};
pub use screen::{ChatScreen, QuickAction, ScreenEvent, ScreenEvents};
pub use services::chat_client::{ChatClient, ChatService};
pub use services::transcript::{Message, Sender, Transcript};
pub use state::{ChatPreferences, Phase};
