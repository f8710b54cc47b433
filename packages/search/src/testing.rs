//! Shared fixtures for tests and the demo server seed.

use crate::types::{AdoptionStatus, PetRecord};

/// A small varied set of listings covering species, colors, sizes, ages
/// and statuses.
pub fn sample_pets() -> Vec<PetRecord> {
    vec![
        PetRecord::new("Rex", "dog", 1.0)
            .with_breed("Labrador")
            .with_color("black")
            .with_gender("male")
            .with_location("Springfield")
            .with_details("Friendly small puppy, great with kids")
            .with_status(AdoptionStatus::Approved),
        PetRecord::new("Milo", "dog", 4.0)
            .with_breed("Beagle")
            .with_color("brown and white")
            .with_gender("male")
            .with_location("Springfield")
            .with_details("Energetic medium-sized hound, loves long walks")
            .with_status(AdoptionStatus::Pending),
        PetRecord::new("Luna", "cat", 2.5)
            .with_breed("Siamese")
            .with_color("cream")
            .with_gender("female")
            .with_location("Shelbyville")
            .with_details("Calm and affectionate lap cat")
            .with_status(AdoptionStatus::Approved),
        PetRecord::new("Whiskers", "cat", 9.0)
            .with_breed("Tabby")
            .with_color("orange")
            .with_gender("male")
            .with_location("Shelbyville")
            .with_details("Quiet senior gentleman, happiest by a window")
            .with_status(AdoptionStatus::Approved),
        PetRecord::new("Coco", "bird", 1.5)
            .with_breed("Cockatiel")
            .with_color("yellow")
            .with_gender("female")
            .with_location("Capital City")
            .with_details("Smart little bird, whistles back at you")
            .with_status(AdoptionStatus::Pending),
        PetRecord::new("Thumper", "rabbit", 3.0)
            .with_breed("Holland Lop")
            .with_color("gray")
            .with_gender("male")
            .with_location("Capital City")
            .with_details("Gentle house rabbit, already litter trained")
            .with_status(AdoptionStatus::Adopted),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_cover_listed_and_unlisted_statuses() {
        let pets = sample_pets();
        assert!(pets.iter().any(|p| p.status.is_listed()));
        assert!(pets.iter().any(|p| !p.status.is_listed()));
    }
}
