//! Demo Data Seeding
//!
//! Populates an empty database with a small, cross-referenced demo dataset
//! the first time the service starts. The inserts are independent; a failure
//! part way through leaves whatever was already written.

use crate::domain::{
    Amenities, Coordinates, ModerationStatus, NewPhoto, NewPlace, NewPlaylist, NewReview,
    NewTrip, NewUser, PlaceStatus, PlaylistStatus, TripStatus, UserStatus, Visibility,
};
use crate::infrastructure::repositories::Repositories;
use crate::shared::error::AppError;

/// Number of rows inserted per table by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub places: usize,
    pub playlists: usize,
    pub trips: usize,
    pub reviews: usize,
    pub photos: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A seeding run that stopped part way, with the rows it had already written.
#[derive(Debug, thiserror::Error)]
#[error("demo data seed stopped after writing {written:?}: {source}")]
pub struct SeedError {
    pub written: SeedReport,
    pub source: AppError,
}

/// Seed demo data when the users table is empty.
///
/// Errors are logged with the rows already written and swallowed; the
/// service keeps running with whatever was inserted.
pub async fn seed_if_empty(repos: &Repositories) -> SeedReport {
    match seed_demo_data(repos).await {
        Ok(report) if report.is_empty() => {
            tracing::debug!("Users present, skipping demo data seed");
            report
        }
        Ok(report) => {
            tracing::info!(
                users = report.users,
                places = report.places,
                playlists = report.playlists,
                trips = report.trips,
                reviews = report.reviews,
                photos = report.photos,
                "Demo data seeded"
            );
            report
        }
        Err(SeedError { written, source }) => {
            tracing::error!(
                error = %source,
                users = written.users,
                places = written.places,
                playlists = written.playlists,
                trips = written.trips,
                reviews = written.reviews,
                photos = written.photos,
                "Failed to seed demo data, partial seed left in place"
            );
            written
        }
    }
}

/// Insert the demo dataset unless users already exist.
///
/// Emptiness of the users table is the only signal: a database holding
/// places but no users is seeded again.
pub async fn seed_demo_data(repos: &Repositories) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();
    match insert_demo_data(repos, &mut report).await {
        Ok(()) => Ok(report),
        Err(source) => Err(SeedError {
            written: report,
            source,
        }),
    }
}

async fn insert_demo_data(repos: &Repositories, report: &mut SeedReport) -> Result<(), AppError> {
    if !repos.users.find_all().await?.is_empty() {
        return Ok(());
    }

    let mut users = Vec::new();
    for (name, email, role, status) in [
        ("Alice Martin", "alice@example.com", "admin", UserStatus::Active),
        ("Bruno Silva", "bruno@example.com", "user", UserStatus::Active),
        ("Chen Wei", "chen@example.com", "user", UserStatus::Active),
        ("Dana Novak", "dana@example.com", "user", UserStatus::Disabled),
    ] {
        let user = repos
            .users
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                role: role.to_string(),
                status,
            })
            .await?;
        users.push(user);
        report.users += 1;
    }

    let mut places = Vec::new();
    for (name, description, location, category, rating, amenities, coords) in [
        (
            "Eiffel Tower",
            "Wrought-iron lattice tower on the Champ de Mars.",
            "Paris, France",
            "landmark",
            4.7,
            vec!["elevator", "restaurant", "gift shop"],
            Coordinates { lat: 48.8584, lng: 2.2945 },
        ),
        (
            "Kyoto Bamboo Grove",
            "Walking paths through towering bamboo stalks in Arashiyama.",
            "Kyoto, Japan",
            "nature",
            4.5,
            vec!["walking trail", "restrooms"],
            Coordinates { lat: 35.0170, lng: 135.6713 },
        ),
        (
            "Machu Picchu",
            "15th-century Inca citadel in the Andes.",
            "Cusco Region, Peru",
            "historic",
            4.9,
            vec!["guided tours", "shuttle bus"],
            Coordinates { lat: -13.1631, lng: -72.5450 },
        ),
    ] {
        let place = repos
            .places
            .create(NewPlace {
                name: name.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                category: category.to_string(),
                image_url: None,
                rating,
                status: PlaceStatus::Active,
                amenities: Some(
                    Amenities(amenities.into_iter().map(String::from).collect()).encode(),
                ),
                coordinates: Some(coords.encode()),
            })
            .await?;
        places.push(place);
        report.places += 1;
    }

    let playlists = [
        NewPlaylist {
            name: "European Classics".to_string(),
            description: Some("Must-see landmarks across Europe.".to_string()),
            creator_id: users[0].id,
            creator_name: users[0].name.clone(),
            status: PlaylistStatus::Active,
            places_count: 1,
            is_featured: true,
            visibility: Visibility::Public,
        },
        NewPlaylist {
            name: "Quiet Escapes".to_string(),
            description: Some("Calm places away from the crowds.".to_string()),
            creator_id: users[1].id,
            creator_name: users[1].name.clone(),
            status: PlaylistStatus::Pending,
            places_count: 2,
            is_featured: false,
            visibility: Visibility::Private,
        },
    ];
    for playlist in playlists {
        repos.playlists.create(playlist).await?;
        report.playlists += 1;
    }

    for (user, place, status) in [
        (&users[0], &places[0], TripStatus::Completed),
        (&users[1], &places[1], TripStatus::Planned),
        (&users[2], &places[2], TripStatus::Ongoing),
    ] {
        repos
            .trips
            .create(NewTrip {
                user_id: user.id,
                destination: place.location.clone(),
                status,
            })
            .await?;
        report.trips += 1;
    }

    for (user, place, content, rating, status) in [
        (
            &users[1],
            &places[0],
            "Breathtaking view from the top, worth the queue.",
            5,
            ModerationStatus::Approved,
        ),
        (
            &users[2],
            &places[1],
            "Beautiful but very crowded at noon.",
            3,
            ModerationStatus::Pending,
        ),
    ] {
        repos
            .reviews
            .create(NewReview {
                user_id: user.id,
                user_name: user.name.clone(),
                place_id: place.id,
                place_name: place.name.clone(),
                content: content.to_string(),
                rating,
                status,
            })
            .await?;
        report.reviews += 1;
    }

    repos
        .photos
        .create(NewPhoto {
            uploader_id: users[2].id,
            uploader_name: users[2].name.clone(),
            url: "https://images.example.com/machu-picchu-sunrise.jpg".to_string(),
            caption: Some("Sunrise over the citadel".to_string()),
            related_type: "place".to_string(),
            related_id: Some(places[2].id),
            status: ModerationStatus::Pending,
        })
        .await?;
    report.photos += 1;

    Ok(())
}
