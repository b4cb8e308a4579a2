use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::models::{StoryRequest, StoryResponse, StorySegment};

// Placeholder art until images come from a real generator.
pub const MOCK_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1472396961693-142e6e269027",
    "https://images.unsplash.com/photo-1466721591366-2d5fba72006d",
    "https://images.unsplash.com/photo-1493962853295-0fd70327578a",
];

pub const OPENING_CONTINUATION: &str = "The journey was just beginning, and nobody knew what adventures awaited beyond the horizon. The air was filled with anticipation as our protagonist took their first steps into the unknown.";

pub const MIDDLE_PASSAGE: &str = "As they ventured deeper into the mysterious lands, strange creatures and unexpected allies appeared. The landscape shifted from familiar terrain to breathtaking views that seemed to defy reality itself.";

pub const FINAL_PASSAGE: &str = "Finally, after overcoming numerous obstacles and facing their deepest fears, they discovered the truth that had been hidden all along. The world would never be the same, and neither would they.";

/// Rendered in place of an `imageStyle` or `theme` the client did not send.
pub const ABSENT_VALUE: &str = "None";

pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

/// Anything that can turn a [`StoryRequest`] into a finished story.
#[async_trait]
pub trait StoryBackend: Send + Sync {
    async fn generate(&self, request: &StoryRequest) -> StoryResponse;
}

/// Returns the same three-part story for every request after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockStoryBackend {
    delay: Duration,
}

impl Default for MockStoryBackend {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl MockStoryBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The user's own first line for "start" requests, otherwise the themed template.
    pub fn opening_line(request: &StoryRequest) -> String {
        if let Some(start) = request.user_opening() {
            return start.to_string();
        }
        let style = request.image_style.as_deref().unwrap_or(ABSENT_VALUE);
        let theme = request.theme.as_deref().unwrap_or(ABSENT_VALUE);
        format!("Once upon a time in a {style} world, an adventure began based on the theme: {theme}")
    }

    pub fn build_segments(opening: &str) -> Vec<StorySegment> {
        let texts = [
            format!("{opening}\n\n{OPENING_CONTINUATION}"),
            MIDDLE_PASSAGE.to_string(),
            FINAL_PASSAGE.to_string(),
        ];
        texts
            .into_iter()
            .zip(MOCK_IMAGES)
            .map(|(text, url)| StorySegment { text, image_url: url.to_string() })
            .collect()
    }

    pub fn compose(request: &StoryRequest) -> StoryResponse {
        let opening = Self::opening_line(request);
        StoryResponse {
            title: request.title.clone(),
            segments: Self::build_segments(&opening),
        }
    }
}

#[async_trait]
impl StoryBackend for MockStoryBackend {
    async fn generate(&self, request: &StoryRequest) -> StoryResponse {
        info!("⏳ Simulating generation for {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        Self::compose(request)
    }
}
