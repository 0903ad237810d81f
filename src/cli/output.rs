use serde::Serialize;

use crate::model::contact::Contact;
use crate::model::filter::FilterState;
use crate::model::prefs::NotificationPrefs;
use crate::model::profile::{ProfileData, timezone_label};
use crate::model::sort::{SortDirection, SortState};
use crate::ops::TableStateController;
use crate::util::unicode::fit_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ContactRowJson<'a> {
    pub selected: bool,
    #[serde(flatten)]
    pub contact: &'a Contact,
}

#[derive(Serialize)]
pub struct ContactListJson<'a> {
    pub page: usize,
    pub page_size: usize,
    pub loaded: usize,
    pub filters: &'a FilterState,
    pub active_filters: usize,
    pub sort: &'a SortState,
    pub rows: Vec<ContactRowJson<'a>>,
    pub selected: Vec<String>,
    pub all_selected: bool,
}

#[derive(Serialize)]
pub struct OptionsJson {
    pub sources: Vec<&'static str>,
    pub segments: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
    pub sort_fields: Vec<&'static str>,
    pub timezones: Vec<TimezoneJson>,
}

#[derive(Serialize)]
pub struct TimezoneJson {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct ProfileJson<'a> {
    #[serde(flatten)]
    pub profile: &'a ProfileData,
    pub initials: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn contact_list_to_json<'a>(
    table: &'a TableStateController,
    rows: &[&'a Contact],
    page: usize,
    page_size: usize,
) -> ContactListJson<'a> {
    ContactListJson {
        page,
        page_size,
        loaded: table.contacts().len(),
        filters: table.filters(),
        active_filters: table.active_filter_count(),
        sort: table.sort(),
        rows: rows
            .iter()
            .map(|c| ContactRowJson {
                selected: table.is_selected(&c.id),
                contact: *c,
            })
            .collect(),
        selected: table.selection().ids(),
        all_selected: table.all_visible_selected(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

const COLUMNS: &[(&str, usize)] = &[
    ("ID", 10),
    ("NAME", 22),
    ("COMPANY", 20),
    ("EMAIL", 26),
    ("SOURCE", 14),
    ("SEGMENT", 11),
    ("STATUS", 11),
];

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn format_row(checked: bool, cells: &[&str]) -> String {
    let mut line = String::from(checkbox(checked));
    for ((_, width), cell) in COLUMNS.iter().zip(cells) {
        line.push(' ');
        line.push_str(&fit_to_width(cell, *width));
    }
    line.trim_end().to_string()
}

/// Format one contact as a table row
pub fn format_contact_row(contact: &Contact, selected: bool) -> String {
    let cells = [
        contact.id.as_str(),
        contact.contact_name.as_str(),
        contact.company_name.as_deref().unwrap_or(""),
        contact.email.as_deref().unwrap_or(""),
        contact.contact_source.as_deref().unwrap_or(""),
        contact.segment.as_deref().unwrap_or(""),
        contact.account_status.as_deref().unwrap_or(""),
    ];
    format_row(selected, &cells)
}

/// Summary of the current filters, e.g. `filters: source=Website segment=all status=all (1 active)`
pub fn format_filter_summary(filters: &FilterState, active: usize) -> String {
    let mut line = format!(
        "filters: source={} segment={} status={} ({} active)",
        filters.source, filters.segment, filters.status, active
    );
    if !filters.search_term.is_empty() {
        line.push_str(&format!("  search: \"{}\"", filters.search_term));
    }
    line
}

pub fn format_sort_summary(sort: &SortState) -> String {
    match sort.field {
        None => "sort: none".to_string(),
        Some(field) => {
            let dir = match sort.direction {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            };
            format!("sort: {} {}", field, dir)
        }
    }
}

/// Full table view: filter/sort summary, header, rows, footer
pub fn format_contact_table(table: &TableStateController, rows: &[&Contact]) -> Vec<String> {
    let mut lines = vec![
        format_filter_summary(table.filters(), table.active_filter_count()),
        format_sort_summary(table.sort()),
        String::new(),
    ];
    let headers: Vec<&str> = COLUMNS.iter().map(|(h, _)| *h).collect();
    lines.push(format_row(table.all_visible_selected(), &headers));
    for c in rows {
        lines.push(format_contact_row(c, table.is_selected(&c.id)));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} of {} contacts shown, {} selected",
        rows.len(),
        table.contacts().len(),
        table.selection().len()
    ));
    lines
}

pub fn format_prefs(prefs: &NotificationPrefs) -> Vec<String> {
    let width = prefs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    prefs
        .iter()
        .map(|(k, v)| format!("{:<width$}  {}", k, if v { "on" } else { "off" }))
        .collect()
}

pub fn format_profile(profile: &ProfileData) -> Vec<String> {
    let tz = match timezone_label(&profile.timezone) {
        Some(label) => format!("{} ({})", profile.timezone, label),
        None => profile.timezone.clone(),
    };
    vec![
        format!("[{}] {}", profile.initials(), profile.full_name),
        format!("email:    {}", profile.email),
        format!("phone:    {}", profile.phone),
        format!("timezone: {}", tz),
        format!("bio:      {}", profile.bio),
        format!("avatar:   {}", profile.avatar_url),
    ]
}
