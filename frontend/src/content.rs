//! Site copy tables.
//!
//! Every list the pages render (features, testimonials, plans, links...) lives
//! in `content/site.json`, compiled into the binary and parsed once at
//! startup. Components read it through the `Rc<SiteContent>` context that
//! `App` provides.

use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

const EMBEDDED: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content has no testimonials")]
    NoTestimonials,
    #[error("testimonial by {author} has rating {rating}, expected 1 to 5")]
    RatingOutOfRange { author: String, rating: u8 },
    #[error("expected exactly one popular pricing plan, found {0}")]
    PopularPlanCount(usize),
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Color tag, rendered as a `feature-card--{accent}` modifier.
    #[serde(default)]
    pub accent: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ServiceTile {
    pub name: String,
    pub emoji: String,
    #[serde(default)]
    pub bookings: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub location: String,
    pub service: String,
    pub rating: u8,
    pub avatar: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CtaStyle {
    #[default]
    Outline,
    Solid,
}

impl CtaStyle {
    pub fn class(self) -> &'static str {
        match self {
            CtaStyle::Outline => "plan-cta plan-cta--outline",
            CtaStyle::Solid => "plan-cta plan-cta--solid",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub period: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub not_included: Vec<String>,
    pub cta_label: String,
    #[serde(default)]
    pub cta_style: CtaStyle,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Step {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SuccessStory {
    pub name: String,
    pub growth: String,
    pub description: String,
    pub initials: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PhoneBooking {
    pub name: String,
    pub time: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct HeroContent {
    pub popular_services: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct HighlightsContent {
    pub features: Vec<Feature>,
    pub categories: Vec<ServiceTile>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TestimonialsContent {
    pub entries: Vec<Testimonial>,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PricingContent {
    pub plans: Vec<PricingPlan>,
    pub faqs: Vec<Faq>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct AppContent {
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub phone_categories: Vec<ServiceTile>,
    pub phone_bookings: Vec<PhoneBooking>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FooterContent {
    pub tagline: String,
    pub sections: Vec<FooterSection>,
    pub social: Vec<SocialLink>,
    pub legal: Vec<NavLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ClientsContent {
    pub features: Vec<Feature>,
    pub steps: Vec<Step>,
    pub services: Vec<ServiceTile>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ProfessionalsContent {
    pub features: Vec<Feature>,
    pub stories: Vec<SuccessStory>,
    pub steps: Vec<Step>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    pub highlights: HighlightsContent,
    pub testimonials: TestimonialsContent,
    pub pricing: PricingContent,
    pub app: AppContent,
    pub footer: FooterContent,
    pub clients: ClientsContent,
    pub professionals: ProfessionalsContent,
}

impl SiteContent {
    /// The copy shipped with the site.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let entries = &self.testimonials.entries;
        if entries.is_empty() {
            return Err(ContentError::NoTestimonials);
        }
        if let Some(bad) = entries.iter().find(|t| !(1..=5).contains(&t.rating)) {
            return Err(ContentError::RatingOutOfRange {
                author: bad.author.clone(),
                rating: bad.rating,
            });
        }

        let popular = self.pricing.plans.iter().filter(|p| p.popular).count();
        if popular != 1 {
            return Err(ContentError::PopularPlanCount(popular));
        }
        Ok(())
    }
}

/// Shared site copy. Falls back to empty tables outside the provider.
#[hook]
pub fn use_site() -> Rc<SiteContent> {
    use_context::<Rc<SiteContent>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> SiteContent {
        SiteContent::embedded().expect("embedded content loads")
    }

    #[test]
    fn embedded_content_loads() {
        let site = embedded();
        assert_eq!(site.brand, "booksy");
        assert_eq!(site.testimonials.entries.len(), 6);
        assert_eq!(site.pricing.plans.len(), 3);
        assert_eq!(site.nav.len(), 3);
        assert_eq!(site.footer.sections.len(), 4);
    }

    #[test]
    fn only_professional_plan_is_popular() {
        let site = embedded();
        let popular: Vec<_> = site
            .pricing
            .plans
            .iter()
            .filter(|p| p.popular)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(popular, ["Professional"]);
    }

    #[test]
    fn plan_details_survive_parsing() {
        let site = embedded();
        let enterprise = &site.pricing.plans[2];
        assert!(enterprise.not_included.is_empty());
        assert_eq!(enterprise.cta_style, CtaStyle::Outline);
        assert_eq!(site.pricing.plans[1].cta_style, CtaStyle::Solid);
        assert_eq!(site.pricing.plans[0].period.as_deref(), Some("forever"));
    }

    #[test]
    fn feature_accents_are_optional() {
        let site = embedded();
        assert!(site.highlights.features.iter().all(|f| f.accent.is_some()));
        assert!(site.clients.features.iter().all(|f| f.accent.is_none()));
    }

    fn with_json(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn rejects_second_popular_plan() {
        let raw = with_json(|v| v["pricing"]["plans"][0]["popular"] = true.into());
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::PopularPlanCount(2))
        ));
    }

    #[test]
    fn rejects_missing_popular_plan() {
        let raw = with_json(|v| v["pricing"]["plans"][1]["popular"] = false.into());
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::PopularPlanCount(0))
        ));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let raw = with_json(|v| v["testimonials"]["entries"][3]["rating"] = 6.into());
        match SiteContent::from_json(&raw) {
            Err(ContentError::RatingOutOfRange { author, rating }) => {
                assert_eq!(author, "David Thompson");
                assert_eq!(rating, 6);
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn rejects_empty_testimonials() {
        let raw = with_json(|v| v["testimonials"]["entries"] = serde_json::json!([]));
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::NoTestimonials)
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SiteContent::from_json("{ \"brand\": "),
            Err(ContentError::Parse(_))
        ));
    }
}
