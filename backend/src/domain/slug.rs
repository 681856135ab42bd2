//! Slug derivation and uniqueness messaging for notes.
//!
//! Derivation is a pure function of the title: transliterate, lowercase,
//! collapse everything else into single hyphens, clip. It never consults
//! the store; collisions surface later as a field-level rejection when the
//! uniqueness check or the store itself refuses the write.

/// Longest stored slug; derived values are clipped to fit.
pub const SLUG_MAX_LENGTH: usize = 100;

/// Suffix appended to the attempted slug when it is already taken.
pub const SLUG_TAKEN_WARNING: &str =
    " - такой slug уже существует, придумайте уникальное значение!";

/// Rejection message for a taken slug, embedding the attempted value
/// verbatim.
#[must_use]
pub fn slug_taken_message(slug: &str) -> String {
    format!("{slug}{SLUG_TAKEN_WARNING}")
}

/// Resolve the stored slug for a submission: an explicit value wins,
/// otherwise the slug derives from the title.
#[must_use]
pub fn resolve_slug(title: &str, explicit: Option<&str>) -> String {
    explicit.map_or_else(|| slugify(title), ToOwned::to_owned)
}

/// Derive a slug from a title.
///
/// Deterministic and independent of existing data: the same title yields
/// the same slug every time, which is why two identically titled notes
/// collide at persistence time instead of silently diverging.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_gap = false;
    for lowered in title.chars().flat_map(char::to_lowercase) {
        if lowered.is_ascii_alphanumeric() {
            flush_gap(&mut slug, &mut pending_gap);
            slug.push(lowered);
        } else if let Some(part) = romanise(lowered) {
            flush_gap(&mut slug, &mut pending_gap);
            slug.push_str(part);
        } else if !slug.is_empty() {
            pending_gap = true;
        }
    }
    slug.truncate(SLUG_MAX_LENGTH);
    slug
}

fn flush_gap(slug: &mut String, pending_gap: &mut bool) {
    if *pending_gap {
        slug.push('-');
        *pending_gap = false;
    }
}

/// Romanisation table for Cyrillic letters. Hard and soft signs vanish
/// without leaving a hyphen behind.
const fn romanise(ch: char) -> Option<&'static str> {
    match ch {
        'а' => Some("a"),
        'б' => Some("b"),
        'в' => Some("v"),
        'г' => Some("g"),
        'д' => Some("d"),
        'е' | 'ё' | 'э' => Some("e"),
        'ж' => Some("zh"),
        'з' => Some("z"),
        'и' => Some("i"),
        'й' => Some("j"),
        'к' => Some("k"),
        'л' => Some("l"),
        'м' => Some("m"),
        'н' => Some("n"),
        'о' => Some("o"),
        'п' => Some("p"),
        'р' => Some("r"),
        'с' => Some("s"),
        'т' => Some("t"),
        'у' => Some("u"),
        'ф' => Some("f"),
        'х' => Some("h"),
        'ц' => Some("c"),
        'ч' => Some("ch"),
        'ш' => Some("sh"),
        'щ' => Some("sch"),
        'ъ' | 'ь' => Some(""),
        'ы' => Some("y"),
        'ю' => Some("ju"),
        'я' => Some("ja"),
        _ => None,
    }
}
