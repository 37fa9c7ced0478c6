//! Read-only article store: the content stars and the ambient decoration.

use crate::config::AMBIENT_STAR_COUNT;
use crate::model::Star;

const AMBIENT_COLORS: [&str; 3] = ["#cbd5e1", "#94a3b8", "#64748b"];

/// Fixed for the session; shared with components through context.
#[derive(Debug)]
pub struct Catalog {
    content: Vec<Star>,
    ambient: Vec<Star>,
}

impl Catalog {
    /// `random` must yield values in `[0, 1)`.
    pub fn new(random: impl FnMut() -> f64) -> Self {
        Self {
            content: content_stars(),
            ambient: ambient_stars(AMBIENT_STAR_COUNT, random),
        }
    }

    pub fn list_content_stars(&self) -> &[Star] {
        &self.content
    }

    pub fn list_ambient_stars(&self) -> &[Star] {
        &self.ambient
    }

    /// Only content stars are articles.
    pub fn get_article_by_id(&self, id: &str) -> Option<&Star> {
        self.content.iter().find(|s| s.id == id)
    }
}

fn ambient_stars(count: usize, mut random: impl FnMut() -> f64) -> Vec<Star> {
    (0..count)
        .map(|i| {
            let color_idx = ((random() * AMBIENT_COLORS.len() as f64) as usize).min(AMBIENT_COLORS.len() - 1);
            Star {
                id: format!("ambient-{i}"),
                title: "Lost Signal".to_string(),
                excerpt: "Just a faint signal from the deep cosmos...".to_string(),
                content: String::new(),
                category: "Void".to_string(),
                date: "Unknown".to_string(),
                color: AMBIENT_COLORS[color_idx].to_string(),
                size: random() * 10.0 + 5.0,
                // -100% .. 200%
                x: random() * 300.0 - 100.0,
                y: random() * 300.0 - 100.0,
                speed: random() * 30.0 + 20.0,
                delay: random() * 5.0,
            }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn article(
    id: &str,
    title: &str,
    excerpt: &str,
    category: &str,
    date: &str,
    color: &str,
    size: f64,
    (x, y): (f64, f64),
    (speed, delay): (f64, f64),
    content: &[&str],
) -> Star {
    Star {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.join("\n"),
        category: category.to_string(),
        date: date.to_string(),
        color: color.to_string(),
        size,
        x,
        y,
        speed,
        delay,
    }
}

fn content_stars() -> Vec<Star> {
    vec![
        article(
            "1",
            "The React Nebula",
            "Exploring the state management patterns in modern React applications.",
            "Frontend",
            "Oct 12, 2023",
            "#61dafb",
            24.0,
            (50.0, 50.0),
            (15.0, 0.0),
            &[
                "Every interface is a cloud of state slowly collapsing into pixels. Where that state lives decides how the whole system feels to work in.",
                "Local state is cheap and obvious until two distant components need the same value. Lifting it up works for a while, then the prop chains get long enough to hide intent.",
                "Context, reducers and external stores each trade locality for reach. Pick the smallest one that keeps a single writer per piece of data.",
            ],
        ),
        article(
            "2",
            "Tailwind Supernova",
            "How utility-first CSS exploded into popularity and changed the way we style.",
            "CSS",
            "Nov 05, 2023",
            "#38bdf8",
            18.0,
            (120.0, 20.0),
            (20.0, 2.0),
            &[
                "Utility classes looked like a step backwards: inline styles with extra steps. Then teams noticed they stopped arguing about naming.",
                "Co-locating styling with markup makes deletion safe. When a component goes away, so does every rule it used.",
                "The cost moves to the design tokens. Get spacing, colour and type scales right and the utilities follow.",
            ],
        ),
        article(
            "3",
            "TypeScript Galaxy",
            "Navigating the strong typing system to prevent runtime black holes.",
            "Language",
            "Dec 01, 2023",
            "#3178c6",
            22.0,
            (-30.0, 65.0),
            (18.0, 5.0),
            &[
                "Types are a map of what the program believes. The gaps in the map are where runtime errors hide.",
                "Discriminated unions turn impossible states into compile errors. Narrowing then reads like the business rules themselves.",
                "Escape hatches exist for a reason, but each `any` is a small hole in the hull. Count them.",
            ],
        ),
        article(
            "4",
            "The AI Horizon",
            "Integrating Gemini API into everyday web applications.",
            "AI",
            "Jan 15, 2024",
            "#a855f7",
            30.0,
            (25.0, 130.0),
            (25.0, 1.0),
            &[
                "A language model is just another remote collaborator: slow, occasionally wrong, sometimes unavailable.",
                "Design the fallback first. A page that renders a canned line when the model is down is better than a spinner that never ends.",
                "Keep prompts small and structured. Ask for JSON when you need fields, and validate what comes back.",
            ],
        ),
        article(
            "5",
            "Performance Pulsar",
            "Optimizing render cycles and network requests for blazing fast load times.",
            "Performance",
            "Feb 10, 2024",
            "#facc15",
            16.0,
            (150.0, 90.0),
            (22.0, 8.0),
            &[
                "Fast pages do less. Every frame that does not need to rebuild something should not.",
                "Allocate once, redraw many times. A particle field generated at mount and only transformed per frame costs the same no matter how often the user drags.",
                "Measure on the slowest device you support, not the laptop you build on.",
            ],
        ),
        article(
            "6",
            "Design Systems Constellation",
            "Building a consistent UI language across your entire product suite.",
            "Design",
            "Mar 20, 2024",
            "#f472b6",
            20.0,
            (-10.0, -20.0),
            (17.0, 3.0),
            &[
                "A design system is a set of promises: this button always behaves like this.",
                "Start with the primitives people already copy between screens. Formalise what exists before inventing what might.",
                "Version it like code and deprecate like code. Silent visual changes erode trust faster than bugs.",
            ],
        ),
        article(
            "7",
            "Serverless Void",
            "Why managing your own infrastructure is becoming a thing of the past.",
            "Backend",
            "Apr 05, 2024",
            "#fb923c",
            14.0,
            (90.0, 30.0),
            (28.0, 6.0),
            &[
                "Nobody wants to patch kernels at 3am. Functions as a service promise that nobody has to.",
                "The bill is paid in cold starts, vendor limits and observability you do not control.",
                "Small, stateless handlers fit the model well. Long-lived connections and heavy state still want a server.",
            ],
        ),
        article(
            "8",
            "Event Loop Orbit",
            "Understanding the asynchronous nature of JavaScript runtime.",
            "JavaScript",
            "May 12, 2024",
            "#bef264",
            19.0,
            (60.0, -50.0),
            (19.0, 4.0),
            &[
                "One thread, one queue, many callbacks. The event loop is simple to describe and easy to starve.",
                "Animation frames run before paint; timers run whenever the queue gets to them. Knowing which one you scheduled explains most jank.",
                "A response that arrives after the user moved on is not an error, just stale. Check before applying it.",
            ],
        ),
        article(
            "9",
            "GraphQL Gravity",
            "Pulling exactly the data you need, nothing more, nothing less.",
            "Data",
            "Jun 28, 2024",
            "#e879f9",
            26.0,
            (160.0, 160.0),
            (24.0, 7.0),
            &[
                "Over-fetching wastes bandwidth; under-fetching wastes round trips. A query language lets the client say exactly what it means.",
                "The server pays for that flexibility with resolver fan-out. Batch and cache at the edges.",
                "Schemas are contracts. Evolve them additively and clients never notice.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn content_ids_are_unique() {
        let cat = Catalog::new(fixed(0.5));
        let mut ids: Vec<&str> = cat.list_content_stars().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cat.list_content_stars().len());
        assert!(cat.list_content_stars().iter().all(|s| !s.content.is_empty()));
    }

    #[test]
    fn lookup_only_finds_articles() {
        let cat = Catalog::new(fixed(0.0));
        assert_eq!(cat.get_article_by_id("4").map(|s| s.title.as_str()), Some("The AI Horizon"));
        assert!(cat.get_article_by_id("does-not-exist").is_none());
        assert!(cat.get_article_by_id("ambient-0").is_none());
    }

    #[test]
    fn ambient_values_stay_in_range() {
        let mut seq = [0.0, 0.999_999, 0.25, 0.75].into_iter().cycle();
        let cat = Catalog::new(move || seq.next().unwrap_or(0.0));
        assert_eq!(cat.list_ambient_stars().len(), AMBIENT_STAR_COUNT);
        for s in cat.list_ambient_stars() {
            assert!(AMBIENT_COLORS.contains(&s.color.as_str()));
            assert!((5.0..15.0).contains(&s.size));
            assert!((-100.0..200.0).contains(&s.x) && (-100.0..200.0).contains(&s.y));
            assert!(s.speed >= 20.0 && s.delay >= 0.0);
        }
        assert_eq!(cat.list_ambient_stars()[3].id, "ambient-3");
    }
}
