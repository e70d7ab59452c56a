use std::sync::Mutex;

use super::*;
use crate::services::contact::ContactMessageRow;
use crate::services::notify::NotifyError;

#[derive(Default)]
struct RecordingNotifier {
    subjects: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, message: &ContactMessageRow) -> Result<(), NotifyError> {
        self.subjects.lock().unwrap().push(message.subject.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_app_state_has_no_notifier() {
    let state = test_helpers::test_app_state();
    assert!(state.notifier.is_none());
}

#[tokio::test]
async fn cloned_state_shares_notifier() {
    let recorder = Arc::new(RecordingNotifier::default());
    let state = test_helpers::test_app_state_with_notifier(recorder.clone());
    let cloned = state.clone();

    let row = ContactMessageRow {
        id: uuid::Uuid::nil(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
        created_at: time::OffsetDateTime::UNIX_EPOCH,
    };
    cloned.notifier.as_ref().unwrap().notify(&row).await.unwrap();

    assert_eq!(*recorder.subjects.lock().unwrap(), vec!["Hi".to_owned()]);
}
