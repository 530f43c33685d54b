//! Sample catalog loaded at startup.

use albums_core::album::Album;

fn album(id: i64, title: &str, artist: &str, price: f64, image_url: &str) -> Album {
    Album {
        id,
        title: title.to_owned(),
        artist: artist.to_owned(),
        price,
        image_url: image_url.to_owned(),
    }
}

/// Returns the six sample albums, ids 1 through 6.
#[must_use]
pub fn sample_albums() -> Vec<Album> {
    vec![
        album(
            1,
            "You, Me and an App Id",
            "Daprize",
            10.99,
            "https://aka.ms/albums-daprlogo",
        ),
        album(
            2,
            "Seven Revision Army",
            "The Blue-Green Stripes",
            13.99,
            "https://aka.ms/albums-containerappslogo",
        ),
        album(
            3,
            "Scale It Up",
            "KEDA Club",
            13.99,
            "https://aka.ms/albums-kedalogo",
        ),
        album(
            4,
            "Lost in Translation",
            "MegaDNS",
            12.99,
            "https://aka.ms/albums-envoylogo",
        ),
        album(
            5,
            "Lock Down Your Love",
            "V is for VNET",
            12.99,
            "https://aka.ms/albums-vnetlogo",
        ),
        album(
            6,
            "Sweet Container O' Mine",
            "Guns N Probeses",
            14.99,
            "https://aka.ms/albums-containerappslogo",
        ),
    ]
}
