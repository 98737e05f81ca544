//! Reusable UI components

pub mod ai_chat;
pub mod chat_input;
pub mod chat_message;
pub mod header;
pub mod loading;
pub mod sidebar;
pub mod toast;

pub use ai_chat::AiChat;
pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use header::Header;
pub use loading::{LoadingDots, LoadingSpinner, SplashScreen, TypingIndicator};
pub use sidebar::DashboardLayout;
pub use toast::ToastHost;
