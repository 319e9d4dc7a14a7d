use disaster_chatbot_client::{
    ChatPreferences, ChatRequest, ChatScreen, ChatService, ClientError, screen::terminal,
};

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};

const REPLY: &str = "Move to higher ground";

struct CountingService {
    calls: AtomicUsize,
    delay: Duration,
}

impl CountingService {
    fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay,
        })
    }
}

#[async_trait]
impl ChatService for CountingService {
    async fn send_message(&self, _request: ChatRequest) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(REPLY.to_string())
    }

    async fn check_health(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn test_commands_and_blank_lines_make_no_calls() {
    let service = CountingService::new(Duration::ZERO);
    let (screen, events) = ChatScreen::new(service.clone(), ChatPreferences::default());
    let input: &[u8] = b"/toggle\n   \n/location Guwahati\n/help\n/quit\nnever sent\n";
    let mut out = Vec::new();

    terminal::run(screen, events, input, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Disaster Management Chatbot"));
    assert!(printed.contains("! Language set to: hinglish"));
    assert!(printed.contains("! Please enter a message"));
    assert!(printed.contains("! Location set to: Guwahati"));
    assert!(printed.contains("/earthquake"));
    assert!(!printed.contains("never sent"));
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_end_of_input_ends_session() {
    let service = CountingService::new(Duration::ZERO);
    let (screen, events) = ChatScreen::new(service, ChatPreferences::default());
    let input: &[u8] = b"";
    let mut out = Vec::new();

    terminal::run(screen, events, input, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Ask me anything about disaster preparedness"));
}

#[tokio::test]
async fn test_reply_arriving_while_reading_is_printed_once() {
    let service = CountingService::new(Duration::ZERO);
    let (screen, events) = ChatScreen::new(service.clone(), ChatPreferences::default());
    let (mut writer, reader) = tokio::io::duplex(64);
    let mut out = Vec::new();

    let typing = async move {
        writer.write_all(b"hello\n").await.unwrap();
        // input stays open while the reply comes back
        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(writer);
    };
    let (result, _) = tokio::join!(
        terminal::run(screen, events, BufReader::new(reader), &mut out),
        typing
    );
    result.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed.matches("You (").count(), 1);
    assert_eq!(printed.matches(REPLY).count(), 1);
    assert_eq!(printed.matches("Chatbot is online and ready!").count(), 1);
    let user_at = printed.find("):\nhello").unwrap();
    let reply_at = printed.find(REPLY).unwrap();
    assert!(user_at < reply_at);
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_piped_input_waits_for_last_reply() {
    let service = CountingService::new(Duration::from_millis(50));
    let (screen, events) = ChatScreen::new(service.clone(), ChatPreferences::default());
    let input: &[u8] = b"hello\n";
    let mut out = Vec::new();

    terminal::run(screen, events, input, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("):\nhello"));
    assert_eq!(printed.matches(REPLY).count(), 1);
}

#[tokio::test]
async fn test_quit_during_request_drops_reply() {
    let service = CountingService::new(Duration::from_millis(200));
    let (screen, events) = ChatScreen::new(service.clone(), ChatPreferences::default());
    let input: &[u8] = b"hello\n/quit\n";
    let mut out = Vec::new();

    terminal::run(screen, events, input, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("):\nhello"));
    assert!(!printed.contains(REPLY));
}
