//! Plain-text views for the terminal

use chrono::{Days, NaiveDate};
use imsakiyah_api::{EventPayload, ImsakiyahData, ImsakiyahDay, Prayer};
use imsakiyah_core::{FastingDayRecord, Page, PageWindow};
use imsakiyah_util::{approximate_hijri_year, format_date_long, format_date_medium};
use std::fmt::{self, Write};

const TODAY_BADGE: &str = "Hari Ini";

/// "Title: description"
pub fn notification(payload: &EventPayload) -> String {
    format!("{}: {}", payload.title(), payload.description())
}

/// Full schedule with one row per day
pub fn schedule_table(out: &mut impl Write, data: &ImsakiyahData, today: NaiveDate) -> fmt::Result {
    let year = match data.hijri_year() {
        Some(year) => year.to_string(),
        None => approximate_hijri_year(today).to_string(),
    };
    writeln!(out, "Jadwal Lengkap {} {}", data.hijri_month(), year)?;
    writeln!(out, "{}, {}", data.city, data.province)?;
    writeln!(out)?;

    write!(out, "{:<18} {:<18}", "Hari Ke", "Tanggal")?;
    for prayer in Prayer::ALL {
        write!(out, " {:<7}", prayer.label())?;
    }
    writeln!(out)?;

    for (index, day) in data.days.iter().enumerate() {
        let number = day.day_number(index);
        let first = if index == 0 {
            format!("{} [{}]", number, TODAY_BADGE)
        } else {
            number.to_string()
        };
        let date = today
            .checked_add_days(Days::new(index as u64))
            .map(format_date_medium)
            .unwrap_or_default();

        write!(out, "{:<18} {:<18}", first, date)?;
        for prayer in Prayer::ALL {
            write!(out, " {:<7}", day.time(prayer))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// All eight times for today
pub fn daily_view(out: &mut impl Write, data: &ImsakiyahData, today: NaiveDate) -> fmt::Result {
    writeln!(out, "Jadwal Hari Ini")?;
    writeln!(out, "{}, {} - {}", data.city, data.province, format_date_long(today))?;
    writeln!(out)?;

    match data.today() {
        Some(day) => prayer_lines(out, day, &Prayer::ALL),
        None => writeln!(out, "Tidak ada jadwal untuk hari ini"),
    }
}

/// Imsak, Maghrib, Subuh and Isya for today
pub fn today_card(out: &mut impl Write, data: &ImsakiyahData, today: NaiveDate) -> fmt::Result {
    writeln!(out, "Jadwal Imsak Hari Ini")?;
    writeln!(out, "{}, {} - {}", data.city, data.province, format_date_long(today))?;
    writeln!(out)?;

    match data.today() {
        Some(day) => prayer_lines(out, day, &Prayer::HIGHLIGHTS),
        None => writeln!(out, "Tidak ada jadwal untuk hari ini"),
    }
}

fn prayer_lines(out: &mut impl Write, day: &ImsakiyahDay, prayers: &[Prayer]) -> fmt::Result {
    for prayer in prayers {
        writeln!(out, "  {:<8} {}", prayer.label(), day.time(*prayer))?;
    }
    Ok(())
}

/// "Progress Puasa Ramadhan" with the rounded percentage
pub fn progress(out: &mut impl Write, percent: f64, completed: usize, total: usize) -> fmt::Result {
    writeln!(out, "Progress Puasa Ramadhan")?;
    writeln!(
        out,
        "{}% selesai ({} dari {} hari)",
        percent.round() as u32,
        completed,
        total
    )
}

/// One page of the tracker. `days` is the schedule the ledger was built from.
pub fn tracker_page(
    out: &mut impl Write,
    page: &Page<'_, FastingDayRecord>,
    days: &[ImsakiyahDay],
) -> fmt::Result {
    for (index, record) in page.indexed() {
        let status = if record.completed {
            "Selesai"
        } else {
            "Belum Selesai"
        };
        let number = days
            .get(index)
            .map(|day| day.day_number(index))
            .unwrap_or(index + 1);

        writeln!(out, "Hari ke-{}  {}  [{}]", number, record.date_label, status)?;
        if let Some(day) = days.get(index) {
            writeln!(out, "    Imsak {}  Maghrib {}", day.imsak, day.maghrib)?;
        }
        if !record.notes.is_empty() {
            writeln!(out, "    Catatan: {}", record.notes)?;
        }
        if record.completed {
            writeln!(out, "    Alhamdulillah")?;
        }
    }
    Ok(())
}

/// Page selector, e.g. "1 2 [3] 4 ... 15"
pub fn page_selector(window: &PageWindow, current: usize) -> String {
    let mut parts: Vec<String> = window
        .pages
        .iter()
        .map(|&p| {
            if p == current {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect();

    if let Some(last) = window.trailing {
        parts.push("...".to_string());
        parts.push(last.to_string());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use imsakiyah_core::{page_window, paginate};
    use imsakiyah_source::sample_schedule;
    use imsakiyah_util::LocationKey;

    fn data(days: usize) -> ImsakiyahData {
        sample_schedule(&LocationKey::new("DKI Jakarta", "Kota Jakarta Selatan"), days)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_schedule_table() {
        let mut out = String::new();
        schedule_table(&mut out, &data(3), today()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Jadwal Lengkap Ramadhan 1446");
        assert!(lines[3].starts_with("Hari Ke"));
        assert!(lines[3].contains("Maghrib"));
        assert!(lines[4].starts_with("1 [Hari Ini]"));
        assert!(lines[4].contains("10 Maret 2025"));
        assert!(lines[5].starts_with("2 "));
        assert!(!lines[5].contains(TODAY_BADGE));
        assert!(lines[6].contains("12 Maret 2025"));
    }

    #[test]
    fn test_schedule_table_without_hijri_year() {
        let mut schedule = data(1);
        schedule.hijri = String::new();

        let mut out = String::new();
        schedule_table(&mut out, &schedule, today()).unwrap();
        assert!(out.starts_with("Jadwal Lengkap Ramadhan 1446\n"));
    }

    #[test]
    fn test_today_card_highlights() {
        let mut out = String::new();
        today_card(&mut out, &data(30), today()).unwrap();

        assert!(out.starts_with("Jadwal Imsak Hari Ini\n"));
        assert!(out.contains("Senin, 10 Maret 2025"));
        assert!(out.contains("Imsak    04:28"));
        assert!(out.contains("Isya     19:20"));
        assert!(!out.contains("Dhuha"));

        let mut out = String::new();
        daily_view(&mut out, &data(30), today()).unwrap();
        assert!(out.contains("Dhuha    06:21"));
    }

    #[test]
    fn test_empty_schedule_views() {
        let mut out = String::new();
        today_card(&mut out, &data(0), today()).unwrap();
        assert!(out.contains("Tidak ada jadwal untuk hari ini"));
    }

    #[test]
    fn test_tracker_page() {
        let schedule = data(12);
        let mut records: Vec<FastingDayRecord> = (0..12)
            .map(|i| FastingDayRecord::new_default(format!("hari {}", i)))
            .collect();
        records[10].completed = true;
        records[10].notes = "buka bersama".into();

        let page = paginate(&records, 2, 10).unwrap();
        let mut out = String::new();
        tracker_page(&mut out, &page, &schedule.days).unwrap();

        assert!(out.starts_with("Hari ke-11  hari 10  [Selesai]\n"));
        assert!(out.contains("    Imsak 04:28  Maghrib 18:11\n"));
        assert!(out.contains("    Catatan: buka bersama\n"));
        assert!(out.contains("    Alhamdulillah\n"));
        assert!(out.contains("Hari ke-12  hari 11  [Belum Selesai]"));
    }

    #[test]
    fn test_progress_and_selector() {
        let mut out = String::new();
        progress(&mut out, 33.4, 10, 30).unwrap();
        assert!(out.ends_with("33% selesai (10 dari 30 hari)\n"));

        assert_eq!(page_selector(&page_window(2, 3), 2), "1 [2] 3");
        assert_eq!(
            page_selector(&page_window(1, 15), 1),
            "[1] 2 3 4 5 6 7 8 9 10 ... 15"
        );
    }

    #[test]
    fn test_notification() {
        let payload = EventPayload::ScheduleLoaded {
            location: LocationKey::new("Bali", "Kota Denpasar"),
        };
        assert_eq!(
            notification(&payload),
            "Berhasil: Menampilkan jadwal imsakiyah untuk Kota Denpasar, Bali"
        );
    }
}
