use crate::model::LikedRecipe;
use crate::storage::{persist, read_collection, SharedStore, LIKES_KEY};
use log::debug;

/// Liked recipes, at most one entry per id, mirrored into the store
pub struct Likes {
    likes: Vec<LikedRecipe>,
    store: SharedStore,
}

impl Likes {
    pub fn new(store: SharedStore) -> Self {
        Self {
            likes: Vec::new(),
            store,
        }
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Add `like` unless its id is already liked; returns the stored entry if added
    pub fn add_like(&mut self, like: LikedRecipe) -> Option<&LikedRecipe> {
        if self.is_liked(&like.id) {
            return None;
        }
        self.likes.push(like);
        self.persist_data();
        self.likes.last()
    }

    pub fn delete_like(&mut self, id: &str) -> bool {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        let removed = self.likes.len() != before;
        if removed {
            self.persist_data();
        }
        removed
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    fn persist_data(&self) {
        persist(self.store.as_ref(), LIKES_KEY, &self.likes);
    }

    /// Replace the in-memory likes with the stored ones, if any are stored.
    ///
    /// Duplicate ids in stored data keep their first occurrence.
    pub fn read_storage(&mut self) {
        if let Some(stored) = read_collection::<Vec<LikedRecipe>>(self.store.as_ref(), LIKES_KEY) {
            let mut likes: Vec<LikedRecipe> = Vec::with_capacity(stored.len());
            for like in stored {
                if !likes.iter().any(|l| l.id == like.id) {
                    likes.push(like);
                }
            }
            debug!("Restored {} likes", likes.len());
            self.likes = likes;
        }
    }
}
