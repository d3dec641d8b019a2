use std::fmt;

use diesel::{pg::Pg, prelude::*};

use crate::db::schema;
use realty_core::util::slug::generate_slug;

/// Market sector a property belongs to. Deleting a sector cascades to its
/// properties.
///
/// The slug is derived from the name exactly once, when absent at save time.
/// Later name edits leave it untouched; a stale slug is accepted behavior.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable)]
#[diesel(table_name = schema::sector)]
#[diesel(check_for_backend(Pg))]
pub struct Sector {
    pub id: uuid::Uuid,
    pub name: String,
    pub slug: String,
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::sector)]
pub struct NewSector<'a> {
    pub id: uuid::Uuid,
    pub name: &'a str,
    pub slug: String,
}

impl<'a> NewSector<'a> {
    /// Builds an insertable sector, deriving the slug from the name when one
    /// is not supplied. This is the only point where a slug is computed.
    #[must_use]
    pub fn new(name: &'a str, slug: Option<&str>) -> Self {
        let slug = match slug {
            Some(s) if !s.is_empty() => s.to_owned(),
            _ => generate_slug(name),
        };

        Self {
            id: uuid::Uuid::now_v7(),
            name,
            slug,
        }
    }
}

/// Name-only update. There is deliberately no slug field here, so a rename
/// can never regenerate the slug.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::sector)]
pub struct SectorRename<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_name_when_absent() {
        let sector = NewSector::new("Downtown Homes", None);
        assert_eq!(sector.slug, "downtown-homes");
    }

    #[test]
    fn test_explicit_slug_wins() {
        let sector = NewSector::new("Downtown Homes", Some("dt"));
        assert_eq!(sector.slug, "dt");
    }

    #[test]
    fn test_empty_slug_treated_as_absent() {
        let sector = NewSector::new("Downtown Homes", Some(""));
        assert_eq!(sector.slug, "downtown-homes");
    }
}
