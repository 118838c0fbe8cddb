//! `simulate` command: mount the header on an in-memory host and replay
//! user/browser events, reporting the menu state after each one.
//!
//! # Events
//!
//! | Event           | Effect                                            |
//! |-----------------|---------------------------------------------------|
//! | `toggle`        | activate the menu toggle (only if it is visible)  |
//! | `resize:<w>`    | resize the viewport to `w` CSS pixels             |
//! | `route:<url>`   | start a client-side navigation to `url`           |
//! | `unmount`       | detach the header from the host                   |

use anyhow::{Result, bail};
use serde::Serialize;
use std::{
    fmt,
    io::{Write, stdout},
};

use crate::config::SiteConfig;
use crate::core::PageDescriptor;
use crate::header::lifecycle::MenuHandle;
use crate::header::{Header, Host, MountedHeader, ToggleProbe, Viewport};
use crate::{debug, log};

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Toggle,
    Resize(u32),
    Route(String),
    Unmount,
}

impl SimEvent {
    pub fn parse(raw: &str) -> Result<Self> {
        let (kind, arg) = match raw.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (raw, None),
        };

        match (kind, arg) {
            ("toggle", None) => Ok(Self::Toggle),
            ("unmount", None) => Ok(Self::Unmount),
            ("resize", Some(width)) => match width.parse() {
                Ok(width) => Ok(Self::Resize(width)),
                Err(_) => bail!("invalid width in `{raw}`, expected e.g. resize:1024"),
            },
            ("route", Some(url)) => Ok(Self::Route(url.to_string())),
            _ => bail!(
                "unknown event `{raw}`, expected toggle, resize:<width>, route:<url> or unmount"
            ),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle => f.write_str("toggle"),
            Self::Resize(width) => write!(f, "resize:{width}"),
            Self::Route(url) => write!(f, "route:{url}"),
            Self::Unmount => f.write_str("unmount"),
        }
    }
}

/// State after one event.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub event: String,
    pub width: u32,
    pub menu_open: bool,
    pub body_class: Option<&'static str>,
    pub default_prevented: bool,
    pub listeners: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// In-memory browser: host event sources plus the mounted header.
struct Simulation {
    host: Host,
    viewport: Viewport,
    width: u32,
    mounted: Option<MountedHeader>,
    menu: MenuHandle,
}

impl Simulation {
    fn new(header: &Header<'_>, viewport: Viewport, width: u32) -> Self {
        let host = Host::new();
        let mounted = header.mount(&host, viewport);
        let menu = mounted.handle();
        Self {
            host,
            viewport,
            width,
            mounted: Some(mounted),
            menu,
        }
    }

    fn listeners(&self) -> usize {
        self.host.resize.listener_count() + self.host.route_change_start.listener_count()
    }

    fn apply(&mut self, step: usize, event: &SimEvent) -> StepReport {
        let mut default_prevented = false;
        let mut note = None;

        match event {
            SimEvent::Toggle => match &self.mounted {
                None => note = Some("header unmounted"),
                Some(mounted) if !mounted.has_toggle() => note = Some("no toggle rendered"),
                Some(_) if !self.viewport.is_toggle_visible(self.width) => {
                    note = Some("toggle hidden at this width")
                }
                Some(mounted) => {
                    default_prevented = mounted.activate_toggle().default_prevented();
                }
            },
            SimEvent::Resize(width) => {
                self.width = *width;
                self.host.resize_to(*width);
            }
            SimEvent::Route(url) => {
                self.host.navigate(url);
            }
            SimEvent::Unmount => match self.mounted.take() {
                Some(mounted) => mounted.unmount(),
                None => note = Some("already unmounted"),
            },
        }

        let menu = self.menu.get();
        StepReport {
            step,
            event: event.to_string(),
            width: self.width,
            menu_open: menu.is_open(),
            body_class: menu.body_class(),
            default_prevented,
            listeners: self.listeners(),
            note,
        }
    }
}

/// Replay `events` against a freshly mounted header.
pub fn simulate(
    config: &SiteConfig,
    page: &PageDescriptor,
    width: u32,
    events: &[SimEvent],
) -> Vec<StepReport> {
    let header = Header::new(config, page);
    let viewport = Viewport::new(config.header.menu_breakpoint);
    let mut sim = Simulation::new(&header, viewport, width);

    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let report = sim.apply(index + 1, event);
            debug!("simulate"; "{} -> open={} listeners={}", report.event, report.menu_open, report.listeners);
            report
        })
        .collect()
}

/// Run the simulate command.
pub fn run_simulate(
    config: &SiteConfig,
    page: &PageDescriptor,
    width: u32,
    raw_events: &[String],
    json: bool,
) -> Result<()> {
    let events = raw_events
        .iter()
        .map(|raw| SimEvent::parse(raw))
        .collect::<Result<Vec<_>>>()?;

    let reports = simulate(config, page, width, &events);

    let mut stdout = stdout().lock();
    for report in &reports {
        if json {
            writeln!(stdout, "{}", serde_json::to_string(report)?)?;
        } else {
            writeln!(stdout, "{}", format_report(report))?;
        }
    }
    stdout.flush()?;

    if let Some(last) = reports.last() {
        log!("simulate"; "{} event(s), menu {}", reports.len(),
            if last.menu_open { "open" } else { "closed" });
    }
    Ok(())
}

fn format_report(report: &StepReport) -> String {
    let state = if report.menu_open { "open" } else { "closed" };
    let mut line = format!(
        "{:>3}  {:<24} {:<6} body=\"{}\"",
        report.step,
        report.event,
        state,
        report.body_class.unwrap_or_default()
    );
    if let Some(note) = report.note {
        line.push_str(&format!("  ({note})"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn nav_config() -> SiteConfig {
        test_parse_config(
            r#"[header]
has_nav = true
menu_breakpoint = 800
nav_links = [{ label = "Posts", url = "/posts" }]
"#,
        )
    }

    fn events(raw: &[&str]) -> Vec<SimEvent> {
        raw.iter().map(|raw| SimEvent::parse(raw).unwrap()).collect()
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(SimEvent::parse("toggle").unwrap(), SimEvent::Toggle);
        assert_eq!(SimEvent::parse("resize:1024").unwrap(), SimEvent::Resize(1024));
        assert_eq!(
            SimEvent::parse("route:/about/").unwrap(),
            SimEvent::Route("/about/".into())
        );
        assert_eq!(SimEvent::parse("unmount").unwrap(), SimEvent::Unmount);

        assert!(SimEvent::parse("resize:wide").is_err());
        assert!(SimEvent::parse("resize").is_err());
        assert!(SimEvent::parse("toggle:1").is_err());
        assert!(SimEvent::parse("click").is_err());
    }

    #[test]
    fn test_display_round_trips_text() {
        for raw in ["toggle", "resize:320", "route:/posts/", "unmount"] {
            assert_eq!(SimEvent::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_toggle_then_route_closes() {
        let config = nav_config();
        let reports = simulate(
            &config,
            &PageDescriptor::default(),
            375,
            &events(&["toggle", "route:/posts/"]),
        );
        assert!(reports[0].menu_open);
        assert!(reports[0].default_prevented);
        assert_eq!(reports[0].body_class, Some("menu--opened"));
        assert!(!reports[1].menu_open);
        assert_eq!(reports[1].body_class, None);
    }

    #[test]
    fn test_resize_to_desktop_closes() {
        let config = nav_config();
        let reports = simulate(
            &config,
            &PageDescriptor::default(),
            375,
            &events(&["toggle", "resize:600", "resize:1200"]),
        );
        assert!(reports[1].menu_open);
        assert!(!reports[2].menu_open);
        assert_eq!(reports[2].width, 1200);
    }

    #[test]
    fn test_toggle_hidden_on_desktop() {
        let config = nav_config();
        let reports = simulate(&config, &PageDescriptor::default(), 1200, &events(&["toggle"]));
        assert!(!reports[0].menu_open);
        assert_eq!(reports[0].note, Some("toggle hidden at this width"));
    }

    #[test]
    fn test_unmount_detaches() {
        let config = nav_config();
        let reports = simulate(
            &config,
            &PageDescriptor::default(),
            375,
            &events(&["toggle", "unmount", "route:/", "resize:1200", "toggle"]),
        );
        assert_eq!(reports[0].listeners, 2);
        assert_eq!(reports[1].listeners, 0);
        // State is frozen once detached.
        assert!(reports[2].menu_open);
        assert!(reports[3].menu_open);
        assert_eq!(reports[4].note, Some("header unmounted"));
    }

    #[test]
    fn test_no_navigation_no_toggle() {
        let config = test_parse_config("");
        let reports = simulate(&config, &PageDescriptor::default(), 375, &events(&["toggle"]));
        assert!(!reports[0].menu_open);
        assert_eq!(reports[0].note, Some("no toggle rendered"));
    }

    #[test]
    fn test_report_json() {
        let config = nav_config();
        let reports = simulate(&config, &PageDescriptor::default(), 375, &events(&["toggle"]));
        let json = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(json["event"], "toggle");
        assert_eq!(json["menu_open"], true);
        assert_eq!(json["body_class"], "menu--opened");
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_format_report() {
        let report = StepReport {
            step: 1,
            event: "toggle".into(),
            width: 375,
            menu_open: true,
            body_class: Some("menu--opened"),
            default_prevented: true,
            listeners: 2,
            note: None,
        };
        let line = format_report(&report);
        assert!(line.contains("toggle"));
        assert!(line.contains("open"));
        assert!(line.contains(r#"body="menu--opened""#));
    }
}
