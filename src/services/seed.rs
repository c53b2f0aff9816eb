// src/services/seed.rs
// DOCUMENTATION: Demo content loader
// PURPOSE: Populate empty gallery and testimonial tables with fixed rows

use crate::db::{DataStore, StoreError, Table};
use crate::models::{GalleryItem, GalleryItemPayload, Resource, Testimonial, TestimonialPayload};
use std::time::Instant;

/// Gallery source record as shipped with the frontend
#[derive(Debug, Clone)]
pub struct GallerySeed {
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub alt: Option<&'static str>,
}

impl GallerySeed {
    pub fn to_payload(&self) -> GalleryItemPayload {
        GalleryItemPayload {
            image_url: self.image.to_string(),
            title: self.title.to_string(),
            category: Some(self.category.to_string()),
            description: Some(self.alt.unwrap_or_default().to_string()),
        }
    }
}

/// Testimonial source record as shipped with the frontend
#[derive(Debug, Clone)]
pub struct TestimonialSeed {
    pub client_name: &'static str,
    pub client_image: Option<&'static str>,
    pub rating: i32,
    pub review: &'static str,
}

impl TestimonialSeed {
    /// Source data has no email
    pub fn to_payload(&self) -> TestimonialPayload {
        TestimonialPayload {
            name: self.client_name.to_string(),
            email: None,
            rating: self.rating,
            comment: self.review.to_string(),
            image_url: self.client_image.map(str::to_string),
        }
    }
}

pub const GALLERY_SEED: &[GallerySeed] = &[
    GallerySeed {
        image: "https://images.unsplash.com/photo-1519741497674-611481863552?w=800",
        title: "Elegant Wedding Ceremony",
        category: "Wedding",
        alt: Some("Wedding ceremony photo"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1465495976277-4387d4b0b4c6?w=800",
        title: "Wedding Reception",
        category: "Wedding",
        alt: Some("Wedding reception photo"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1519741497674-611481863552?w=800",
        title: "Bridal Portraits",
        category: "Wedding",
        alt: Some("Bridal portrait"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800",
        title: "Corporate Event",
        category: "Events",
        alt: Some("Corporate event photography"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1478146897152-7e675f0a3e0a?w=800",
        title: "Birthday Celebration",
        category: "Events",
        alt: Some("Birthday party photography"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=800",
        title: "Anniversary Party",
        category: "Events",
        alt: Some("Anniversary celebration"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=800",
        title: "Family Portrait",
        category: "Portraits",
        alt: Some("Family portrait session"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800",
        title: "Professional Headshot",
        category: "Portraits",
        alt: Some("Corporate headshot"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=800",
        title: "Individual Portrait",
        category: "Portraits",
        alt: Some("Individual portrait"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e?w=800",
        title: "Fashion Studio",
        category: "Studio Shoots",
        alt: Some("Fashion photography"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=800",
        title: "Beauty Portrait",
        category: "Studio Shoots",
        alt: Some("Beauty photography"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800",
        title: "Product Showcase",
        category: "Products",
        alt: Some("Product photography"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800",
        title: "E-commerce Product",
        category: "Products",
        alt: Some("Product photography"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1515488042361-ee00e0ddd4e4?w=800",
        title: "Newborn Session",
        category: "Baby Shoots",
        alt: Some("Newborn photography"),
    },
    GallerySeed {
        image: "https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?w=800",
        title: "Baby Portrait",
        category: "Baby Shoots",
        alt: Some("Baby photography"),
    },
];

pub const TESTIMONIAL_SEED: &[TestimonialSeed] = &[
    TestimonialSeed {
        client_name: "Sarah & Michael Johnson",
        client_image: Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150"),
        rating: 5,
        review: "Absolutely incredible! They captured every moment of our special day perfectly. The photos are stunning and we couldn't be happier. Highly recommend!",
    },
    TestimonialSeed {
        client_name: "David Chen",
        client_image: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150"),
        rating: 5,
        review: "Professional, efficient, and the results exceeded expectations. The team made me feel comfortable and the final photos are perfect for my professional profile.",
    },
    TestimonialSeed {
        client_name: "Emily Rodriguez",
        client_image: None,
        rating: 5,
        review: "Our family photos turned out beautifully! The photographer was patient with our kids and captured genuine moments. We'll treasure these forever.",
    },
    TestimonialSeed {
        client_name: "James Wilson",
        client_image: None,
        rating: 5,
        review: "They photographed our company's annual event and did an amazing job. Great attention to detail and captured all the important moments.",
    },
    TestimonialSeed {
        client_name: "Lisa Thompson",
        client_image: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150"),
        rating: 5,
        review: "The newborn session was handled with such care and professionalism. The photos of our baby are absolutely precious. Thank you!",
    },
    TestimonialSeed {
        client_name: "Robert Martinez",
        client_image: None,
        rating: 5,
        review: "Excellent product photography for our e-commerce store. The images are high quality and really showcase our products well. Great service!",
    },
];

/// Result of seeding one table
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// Rows inserted by the bulk insert
    Inserted(usize),
    /// Table already had data
    Skipped,
    /// No source records to load
    NothingToSeed,
    Failed(String),
}

impl SeedOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SeedOutcome::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct SeedReport {
    pub table: Table,
    pub label: &'static str,
    pub outcome: SeedOutcome,
    pub duration_secs: f64,
}

/// Table-level idempotent seeder
/// DOCUMENTATION: A table is seeded only when it is empty. Rows are never
/// compared one by one, so a partially filled table is left untouched.
pub struct SeedLoader<'a> {
    store: &'a dyn DataStore,
}

impl<'a> SeedLoader<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        Self { store }
    }

    /// Query both seedable tables once so a bad URL, key or missing schema
    /// is reported before anything is written
    pub async fn check_connection(&self) -> Result<(), StoreError> {
        for (table, label) in [(Table::Gallery, "Gallery"), (Table::Testimonials, "Testimonials")] {
            self.store.exists_any(table).await.map_err(|e| StoreError {
                code: e.code.clone(),
                message: format!("{} table error: {}", label, e.message),
            })?;
        }
        Ok(())
    }

    pub async fn seed_gallery(&self) -> SeedReport {
        let payloads = GALLERY_SEED.iter().map(GallerySeed::to_payload).collect();
        self.seed::<GalleryItem>(payloads).await
    }

    pub async fn seed_testimonials(&self) -> SeedReport {
        let payloads = TESTIMONIAL_SEED.iter().map(TestimonialSeed::to_payload).collect();
        self.seed::<Testimonial>(payloads).await
    }

    /// Seed gallery, then testimonials; a failure in one does not stop the other
    pub async fn run(&self) -> Vec<SeedReport> {
        vec![self.seed_gallery().await, self.seed_testimonials().await]
    }

    async fn seed<R: Resource>(&self, payloads: Vec<R::Payload>) -> SeedReport {
        let started = Instant::now();
        let outcome = self.seed_table::<R>(payloads).await;

        SeedReport {
            table: R::TABLE,
            label: R::LABEL,
            outcome,
            duration_secs: started.elapsed().as_secs_f64(),
        }
    }

    async fn seed_table<R: Resource>(&self, payloads: Vec<R::Payload>) -> SeedOutcome {
        let table = R::TABLE;
        if payloads.is_empty() {
            log::warn!("No {} records to seed", table);
            return SeedOutcome::NothingToSeed;
        }
        log::info!("Found {} {} records to seed", payloads.len(), table);

        match self.store.exists_any(table).await {
            Ok(true) => {
                log::warn!(
                    "{} table already has data, skipping. Clear it first to re-seed.",
                    table
                );
                return SeedOutcome::Skipped;
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("Could not check {} for existing rows: {}", table, e);
                return SeedOutcome::Failed(e.message);
            }
        }

        let rows = match payloads
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(rows) => rows,
            Err(e) => return SeedOutcome::Failed(format!("Failed to encode seed rows: {}", e)),
        };

        match self.store.insert(table, rows).await {
            Ok(created) => {
                log::info!("Seeded {} rows into {}", created.len(), table);
                SeedOutcome::Inserted(created.len())
            }
            Err(e) => {
                log::error!("Error seeding {}: {}", table, e);
                SeedOutcome::Failed(e.message)
            }
        }
    }
}
