use std::collections::{HashMap, HashSet, VecDeque};

use iced::widget::image;

use crate::view_model::Artwork;

/// Decoded image handles by URL plus the download queue that fills them.
#[derive(Debug, Default)]
pub struct ImageCache {
    handles: HashMap<String, image::Handle>,
    failed: HashSet<String>,
    queue: VecDeque<String>,
    in_flight: Option<String>,
}

impl ImageCache {
    pub fn get(&self, url: &str) -> Option<&image::Handle> {
        self.handles.get(url)
    }

    /// Loaded handle for `artwork`. Pending, failed and absent images all
    /// resolve to `None` and draw the placeholder.
    pub fn resolve(&self, artwork: &Artwork) -> Option<&image::Handle> {
        match artwork {
            Artwork::Image { url, .. } => self.get(url),
            Artwork::Placeholder => None,
        }
    }

    /// Queues every URL not already loaded, failed or pending.
    pub fn enqueue<I: IntoIterator<Item = String>>(&mut self, urls: I) {
        for url in urls {
            let known = self.handles.contains_key(&url)
                || self.failed.contains(&url)
                || self.queue.contains(&url)
                || self.in_flight.as_deref() == Some(url.as_str());
            if !known {
                self.queue.push_back(url);
            }
        }
    }

    /// Next URL to download, if nothing is in flight.
    pub fn next(&mut self) -> Option<String> {
        if self.in_flight.is_some() {
            return None;
        }
        let url = self.queue.pop_front()?;
        self.in_flight = Some(url.clone());
        Some(url)
    }

    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, String>) {
        if self.in_flight.as_deref() == Some(url.as_str()) {
            self.in_flight = None;
        }
        match result {
            Ok(bytes) => {
                self.handles.insert(url, image::Handle::from_bytes(bytes));
            }
            Err(e) => {
                log::warn!("failed to load image {}: {}", url, e);
                self.failed.insert(url);
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len() + usize::from(self.in_flight.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downloads_one_at_a_time_in_fifo_order() {
        let mut cache = ImageCache::default();
        cache.enqueue(["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(cache.pending(), 2);

        assert_eq!(cache.next().as_deref(), Some("a"));
        assert_eq!(cache.next(), None, "a is still in flight");

        cache.finish("a".into(), Ok(vec![1, 2, 3]));
        assert!(cache.get("a").is_some());
        assert_eq!(cache.next().as_deref(), Some("b"));

        cache.finish("b".into(), Err("404".into()));
        assert!(cache.get("b").is_none());
        cache.enqueue(["a".to_string(), "b".to_string()]);
        assert_eq!(cache.pending(), 0);
    }

    #[test]
    fn unresolved_images_fall_back_like_absent_ones() {
        let art = |url: &str| Artwork::Image {
            url: url.into(),
            alt: "Hades".into(),
        };
        let mut cache = ImageCache::default();
        cache.enqueue(["broken".to_string(), "ok".to_string(), "pending".to_string()]);

        assert_eq!(cache.next().as_deref(), Some("broken"));
        cache.finish("broken".into(), Err("connection reset".into()));
        assert_eq!(cache.next().as_deref(), Some("ok"));
        cache.finish("ok".into(), Ok(vec![0x89, b'P', b'N', b'G']));

        assert!(cache.resolve(&art("pending")).is_none());
        assert!(cache.resolve(&art("broken")).is_none());
        assert!(cache.resolve(&Artwork::Placeholder).is_none());
        assert!(cache.resolve(&art("ok")).is_some());
    }
}
