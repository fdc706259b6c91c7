//! Console form: one prompt per field, default shown in brackets, re-prompt
//! until the entry parses and falls inside the field's range.

use super::{
    SessionRecord, VisitorType, BROWSER_MAX, MONTH_CHOICES, OPERATING_SYSTEM_MAX, REGION_MAX,
    TRAFFIC_TYPE_MAX,
};
use std::io::{self, BufRead, Write};

/// Interactive collector over any line-oriented input and output pair.
/// The binary wires it to stdin/stdout; tests feed it a scripted cursor.
pub struct SessionForm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SessionForm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect one complete session record. Fails with `UnexpectedEof` if the
    /// input stream closes before the form is complete.
    pub fn collect(&mut self) -> io::Result<SessionRecord> {
        writeln!(self.output, "Session metrics (empty line keeps the default)")?;

        let administrative_pages = self.prompt_count("Administrative pages visited", 0)?;
        let informational_pages = self.prompt_count("Informational pages visited", 0)?;
        let product_related_pages = self.prompt_count("Product pages visited", 1)?;

        let administrative_duration = self.prompt_nonneg("Time on administrative pages (s)", 0.0)?;
        let informational_duration = self.prompt_nonneg("Time on informational pages (s)", 0.0)?;
        let product_related_duration = self.prompt_nonneg("Time on product pages (s)", 60.0)?;

        let bounce_rate = self.prompt_rate("Bounce rate", 0.02)?;
        let exit_rate = self.prompt_rate("Exit rate", 0.04)?;
        let page_value = self.prompt_nonneg("Page value", 0.0)?;

        let special_day_proximity = self.prompt_rate("Special day proximity", 0.0)?;
        let month = self.prompt_month()?;
        let visitor_type = self.prompt_visitor()?;

        let traffic_type = self.prompt_category("Traffic type", TRAFFIC_TYPE_MAX)?;
        let region = self.prompt_category("Region", REGION_MAX)?;
        let operating_system = self.prompt_category("Operating system", OPERATING_SYSTEM_MAX)?;
        let browser = self.prompt_category("Browser", BROWSER_MAX)?;
        let is_weekend = self.prompt_bool("Weekend session", false)?;

        Ok(SessionRecord {
            administrative_pages,
            administrative_duration,
            informational_pages,
            informational_duration,
            product_related_pages,
            product_related_duration,
            bounce_rate,
            exit_rate,
            page_value,
            special_day_proximity,
            month,
            visitor_type,
            traffic_type,
            region,
            operating_system,
            browser,
            is_weekend,
        })
    }

    /// Yes/no question outside the form, e.g. whether to score another
    /// session. A closed input stream counts as "no".
    pub fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        match self.prompt_bool(question, default) {
            Ok(v) => Ok(v),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn prompt<T>(
        &mut self,
        label: &str,
        default_display: &str,
        default: T,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<T> {
        loop {
            write!(self.output, "{} [{}]: ", label, default_display)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the form was complete",
                ));
            }
            let entry = line.trim();
            if entry.is_empty() {
                return Ok(default);
            }
            match parse(entry) {
                Ok(v) => return Ok(v),
                Err(why) => writeln!(self.output, "  {}", why)?,
            }
        }
    }

    fn prompt_count(&mut self, label: &str, default: u32) -> io::Result<u32> {
        self.prompt(label, &default.to_string(), default, |s| {
            s.parse::<u32>()
                .map_err(|_| "enter a non-negative whole number".to_string())
        })
    }

    fn prompt_nonneg(&mut self, label: &str, default: f64) -> io::Result<f64> {
        self.prompt(label, &format!("{:.2}", default), default, |s| {
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
                _ => Err("enter a non-negative number".to_string()),
            }
        })
    }

    fn prompt_rate(&mut self, label: &str, default: f64) -> io::Result<f64> {
        self.prompt(label, &format!("{:.2}", default), default, |s| {
            match s.parse::<f64>() {
                Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
                _ => Err("enter a number between 0 and 1".to_string()),
            }
        })
    }

    fn prompt_category(&mut self, label: &str, max: u8) -> io::Result<u8> {
        let full = format!("{} (1-{})", label, max);
        self.prompt(&full, "1", 1, move |s| match s.parse::<u8>() {
            Ok(v) if (1..=max).contains(&v) => Ok(v),
            _ => Err(format!("enter a number between 1 and {}", max)),
        })
    }

    fn prompt_month(&mut self) -> io::Result<String> {
        let choices = MONTH_CHOICES.join(", ");
        let label = format!("Month ({})", choices);
        self.prompt(&label, MONTH_CHOICES[0], MONTH_CHOICES[0].to_string(), |s| {
            MONTH_CHOICES
                .iter()
                .copied()
                .find(|m| *m == s)
                .map(|m| m.to_string())
                .ok_or_else(|| format!("choose one of: {}", choices))
        })
    }

    fn prompt_visitor(&mut self) -> io::Result<VisitorType> {
        let choices = VisitorType::ALL.map(|v| v.as_str()).join(", ");
        let label = format!("Visitor type ({})", choices);
        self.prompt(&label, VisitorType::Returning.as_str(), VisitorType::Returning, |s| {
            VisitorType::from_label(s).ok_or_else(|| format!("choose one of: {}", choices))
        })
    }

    fn prompt_bool(&mut self, label: &str, default: bool) -> io::Result<bool> {
        let display = if default { "y" } else { "n" };
        let full = format!("{} (y/n)", label);
        self.prompt(&full, display, default, |s| match s {
            "y" | "Y" | "yes" => Ok(true),
            "n" | "N" | "no" => Ok(false),
            _ => Err("answer y or n".to_string()),
        })
    }
}
