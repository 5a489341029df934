//! Expedition-member link generation.

use rand::Rng;

use crate::script::SqlRow;

/// Links written for every expedition.
pub const LINKS_PER_EXPEDITION: usize = 5;

/// Generated row for the `expeditions_members` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedLink {
    pub expedition_id: usize,
    pub member_id: usize,
}

impl SqlRow for GeneratedLink {
    const TABLE: &'static str = "expeditions_members";
    const COLUMNS: &'static [&'static str] = &["expedition_id", "member_id"];

    fn values(&self) -> Vec<String> {
        vec![self.expedition_id.to_string(), self.member_id.to_string()]
    }
}

/// Assigns random members to expeditions.
///
/// Draws are independent, so one expedition may list the same member more than once.
#[derive(Debug, Clone)]
pub struct LinkGenerator {
    member_count: usize,
}

impl LinkGenerator {
    /// Creates a generator drawing `member_id` from `1..=member_count`.
    ///
    /// `member_count` must be at least 1.
    pub fn new(member_count: usize) -> Self {
        Self { member_count }
    }

    /// Generates the links for a single expedition.
    pub fn generate_for_expedition(
        &self,
        expedition_id: usize,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedLink> {
        (0..LINKS_PER_EXPEDITION)
            .map(|_| GeneratedLink {
                expedition_id,
                member_id: rng.gen_range(1..=self.member_count),
            })
            .collect()
    }

    /// Generates links for expeditions `1..=expedition_count`, grouped by expedition.
    pub fn generate_batch(
        &self,
        expedition_count: usize,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedLink> {
        (1..=expedition_count)
            .flat_map(|id| self.generate_for_expedition(id, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_links_per_expedition() {
        let link_gen = LinkGenerator::new(10);
        let mut rng = rand::thread_rng();
        let links = link_gen.generate_batch(4, &mut rng);

        assert_eq!(links.len(), 4 * LINKS_PER_EXPEDITION);
        for (i, chunk) in links.chunks(LINKS_PER_EXPEDITION).enumerate() {
            assert!(chunk.iter().all(|l| l.expedition_id == i + 1));
        }
        assert!(links.iter().all(|l| (1..=10).contains(&l.member_id)));
    }

    #[test]
    fn test_single_member_repeats() {
        let link_gen = LinkGenerator::new(1);
        let links = link_gen.generate_for_expedition(1, &mut rand::thread_rng());

        assert_eq!(
            links,
            vec![
                GeneratedLink {
                    expedition_id: 1,
                    member_id: 1
                };
                LINKS_PER_EXPEDITION
            ]
        );
    }
}
