// Slot window materialization

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, TimeZone, Utc};
use rand::Rng;

use crate::entities::{ScheduleEntry, SlotTemplate};
use crate::errors::DomainError;
use crate::value_objects::{DateId, SlotStatus, SlotType};

/// Built-in windows used when a slot type has no template hours configured.
/// `random` deliberately has none: without a template there is nothing to
/// anchor its drawn window to.
fn fallback_hours(slot_type: SlotType) -> Option<(u32, u32)> {
    match slot_type {
        SlotType::Morning => Some((8, 12)),
        SlotType::Afternoon => Some((14, 18)),
        SlotType::Night => Some((20, 24)),
        SlotType::Random => None,
    }
}

const DEFAULT_RANDOM_DURATION_MINUTES: u32 = 60;

/// Compute the absolute start/end of a slot anchored to `date_id`'s
/// calendar day in the configured timezone.
///
/// Precedence: template `start_hour`/`end_hour`, then template
/// `duration_minutes` for the end, then the built-in per-type window. An
/// end at or before the start rolls to the next day (overnight windows).
pub fn compute_window(
    slot_type: SlotType,
    template: Option<&SlotTemplate>,
    date_id: &DateId,
    utc_offset_minutes: i32,
) -> Result<(DateTime<Utc>, DateTime<Utc>), DomainError> {
    let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
        .ok_or_else(|| DomainError::InvalidHours("utc offset out of range".to_string()))?;
    let midnight = offset
        .from_local_datetime(&date_id.date().and_time(NaiveTime::MIN))
        .single()
        .ok_or_else(|| DomainError::InvalidHours("ambiguous local midnight".to_string()))?;

    let template_start = template.and_then(|t| t.start_hour);
    let template_end = template.and_then(|t| t.end_hour);
    let duration_minutes = template.and_then(|t| t.duration_minutes);
    for hour in [template_start, template_end].into_iter().flatten() {
        if hour > 24 {
            return Err(DomainError::InvalidHours(format!(
                "hour {} out of range 0..=24",
                hour
            )));
        }
    }

    let start_hour = match (template_start, fallback_hours(slot_type)) {
        (Some(hour), _) => hour,
        (None, Some((start, _))) => start,
        (None, None) => {
            // Random slot with a template but no pinned hours: draw a start
            // within the day, leaving room for the duration.
            if template.is_none() {
                return Err(DomainError::TemplateMissing(slot_type));
            }
            rand::thread_rng().gen_range(0..20)
        }
    };

    let start_at = midnight + Duration::hours(i64::from(start_hour));
    let mut end_at = match (template_end, duration_minutes, fallback_hours(slot_type)) {
        (Some(hour), _, _) => midnight + Duration::hours(i64::from(hour)),
        (None, Some(minutes), _) => start_at + Duration::minutes(i64::from(minutes)),
        (None, None, Some((_, end))) => midnight + Duration::hours(i64::from(end)),
        (None, None, None) => {
            start_at + Duration::minutes(i64::from(DEFAULT_RANDOM_DURATION_MINUTES))
        }
    };
    if end_at <= start_at {
        end_at += Duration::days(1);
    }

    Ok((start_at.with_timezone(&Utc), end_at.with_timezone(&Utc)))
}

/// Build the day-specific entry for a slot, without items; the caller seeds
/// items through the merge engine so template defaults and hand-edits go
/// through the same path.
pub fn materialize_entry(
    slot_type: SlotType,
    template: Option<&SlotTemplate>,
    date_id: &DateId,
    utc_offset_minutes: i32,
) -> Result<ScheduleEntry, DomainError> {
    let (start_at, end_at) = compute_window(slot_type, template, date_id, utc_offset_minutes)?;
    Ok(ScheduleEntry {
        date_id: date_id.clone(),
        slot_type,
        name: template.map(|t| t.name.clone()).unwrap_or_default(),
        name_ar: template.map(|t| t.name_ar.clone()).unwrap_or_default(),
        background_url: template.map(|t| t.background_url.clone()).unwrap_or_default(),
        start_at,
        end_at,
        status: SlotStatus::Scheduled,
        items: Vec::new(),
        version: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const UTC_PLUS_3: i32 = 180;

    fn date() -> DateId {
        "2026-08-27".parse().unwrap()
    }

    fn template(
        slot_type: SlotType,
        start_hour: Option<u32>,
        end_hour: Option<u32>,
        duration_minutes: Option<u32>,
    ) -> SlotTemplate {
        SlotTemplate {
            slot_type,
            name: "Test".to_string(),
            name_ar: String::new(),
            background_url: String::new(),
            default_item_keys: Vec::new(),
            active: true,
            start_hour,
            end_hour,
            duration_minutes,
        }
    }

    #[test]
    fn template_hours_anchor_to_local_day() {
        let template = template(SlotType::Morning, Some(9), Some(13), None);
        let (start, end) =
            compute_window(SlotType::Morning, Some(&template), &date(), UTC_PLUS_3).unwrap();
        // 09:00 at UTC+3 is 06:00 UTC.
        assert_eq!(start.to_rfc3339(), "2026-08-27T06:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-08-27T10:00:00+00:00");
    }

    #[test]
    fn missing_template_uses_builtin_window() {
        let (start, end) = compute_window(SlotType::Night, None, &date(), 0).unwrap();
        assert_eq!(start.to_rfc3339(), "2026-08-27T20:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-08-28T00:00:00+00:00");
    }

    #[test]
    fn duration_beats_builtin_end() {
        let template = template(SlotType::Afternoon, Some(15), None, Some(90));
        let (start, end) =
            compute_window(SlotType::Afternoon, Some(&template), &date(), 0).unwrap();
        assert_eq!((end - start).num_minutes(), 90);
        assert_eq!(start.hour(), 15);
    }

    #[test]
    fn overnight_window_rolls_end_to_next_day() {
        let template = template(SlotType::Night, Some(22), Some(2), None);
        let (start, end) = compute_window(SlotType::Night, Some(&template), &date(), 0).unwrap();
        assert!(end > start);
        assert_eq!((end - start).num_hours(), 4);
    }

    #[test]
    fn random_without_template_is_missing() {
        let err = compute_window(SlotType::Random, None, &date(), 0).unwrap_err();
        assert!(matches!(err, DomainError::TemplateMissing(SlotType::Random)));
    }

    #[test]
    fn random_with_template_draws_a_window_of_requested_duration() {
        let template = template(SlotType::Random, None, None, Some(45));
        let (start, end) = compute_window(SlotType::Random, Some(&template), &date(), 0).unwrap();
        assert_eq!((end - start).num_minutes(), 45);
        assert_eq!(start.date_naive(), date().date());
    }

    #[test]
    fn hours_above_24_are_rejected() {
        let template = template(SlotType::Morning, Some(25), None, None);
        let err =
            compute_window(SlotType::Morning, Some(&template), &date(), 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidHours(_)));
    }

    #[test]
    fn materialized_entry_starts_scheduled_and_empty() {
        let entry = materialize_entry(SlotType::Morning, None, &date(), UTC_PLUS_3).unwrap();
        assert_eq!(entry.status, SlotStatus::Scheduled);
        assert!(entry.items.is_empty());
        assert_eq!(entry.version, 0);
        assert!(entry.end_at > entry.start_at);
    }
}
