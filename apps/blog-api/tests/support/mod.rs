//! Per-scenario fixtures: every test gets its own store, seeded from a fixed RNG seed.

use std::sync::Arc;

use async_trait::async_trait;
use rand::{Rng, SeedableRng, rngs::StdRng};
use uuid::Uuid;

use blog_api::state::AppState;
use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};
use blog_infra::database::InMemoryBlogPostRepository;

const WORDS: &[&str] = &[
    "rust", "borrow", "async", "trait", "lifetime", "crate", "macro", "tokio", "actix", "serde",
    "iterator", "closure", "pattern", "module", "cargo", "thread",
];

const AUTHORS: &[&str] = &[
    "Ada Lovelace",
    "Grace Hopper",
    "Barbara Liskov",
    "Edsger Dijkstra",
    "Niklaus Wirth",
];

fn sentence(rng: &mut StdRng, words: usize) -> String {
    (0..words)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic blog post generator.
pub fn generate_posts(seed: u64, n: usize) -> Vec<NewBlogPost> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let author = AUTHORS[rng.gen_range(0..AUTHORS.len())];
            let title = sentence(&mut rng, 3);
            let content = sentence(&mut rng, 12);
            NewBlogPost::new(author, title, content)
        })
        .collect()
}

/// A clean store for one test scenario.
pub struct Scenario {
    pub store: Arc<InMemoryBlogPostRepository>,
    pub seeded: Vec<BlogPost>,
}

impl Scenario {
    pub fn empty() -> Self {
        Self {
            store: Arc::new(InMemoryBlogPostRepository::new()),
            seeded: Vec::new(),
        }
    }

    pub async fn seeded(seed: u64, n: usize) -> Self {
        let store = Arc::new(InMemoryBlogPostRepository::new());
        let seeded = store
            .insert_many(generate_posts(seed, n))
            .await
            .expect("seeding should succeed");
        Self { store, seeded }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.store.clone())
    }

    pub async fn count(&self) -> u64 {
        self.store.count().await.unwrap()
    }

    pub async fn fetch(&self, id: Uuid) -> Option<BlogPost> {
        self.store.find_by_id(id).await.unwrap()
    }

    pub async fn any_post(&self) -> BlogPost {
        self.store
            .find_one()
            .await
            .unwrap()
            .expect("scenario should be seeded")
    }

    /// Release the scenario's records.
    pub async fn teardown(self) {
        self.store.drop_all().await.unwrap();
        assert_eq!(self.store.count().await.unwrap(), 0);
    }
}

/// A store whose backend is unreachable.
pub struct UnreachableStore;

fn unreachable() -> RepoError {
    RepoError::Connection("connection refused".to_string())
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for UnreachableStore {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Err(unreachable())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Err(unreachable())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<bool, RepoError> {
        Err(unreachable())
    }
}

#[async_trait]
impl BlogPostRepository for UnreachableStore {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Err(unreachable())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        Err(unreachable())
    }

    async fn insert(&self, _post: NewBlogPost) -> Result<BlogPost, RepoError> {
        Err(unreachable())
    }

    async fn insert_many(&self, _posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        Err(unreachable())
    }

    async fn update_by_id(
        &self,
        _id: Uuid,
        _changes: BlogPostChanges,
    ) -> Result<BlogPost, RepoError> {
        Err(unreachable())
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        Err(unreachable())
    }
}
