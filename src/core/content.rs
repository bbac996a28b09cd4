//! Static content records for the landing page
//!
//! Every section renders one of these records. Defaults are the copy shipped
//! on the live page; callers can pass their own lists through component props.

use serde::{Deserialize, Serialize};

/// Accent colour used by cards, dots and glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    #[default]
    Amber,
    Emerald,
    Blue,
    Purple,
    Cyan,
    Green,
    Yellow,
}

impl Accent {
    /// Card background gradient. Only the five card palettes exist; every
    /// other accent falls back to amber.
    pub fn card_gradient(&self) -> &'static str {
        match self {
            Accent::Red => "from-red-900/30 via-red-800/20 to-transparent",
            Accent::Emerald => "from-emerald-900/30 via-emerald-800/20 to-transparent",
            Accent::Blue => "from-blue-900/30 via-blue-800/20 to-transparent",
            Accent::Purple => "from-purple-900/30 via-purple-800/20 to-transparent",
            _ => "from-amber-900/30 via-amber-800/20 to-transparent",
        }
    }

    /// Card border, same fallback rule as [`Accent::card_gradient`]
    pub fn card_border(&self) -> &'static str {
        match self {
            Accent::Red => "border-red-800/30",
            Accent::Emerald => "border-emerald-800/30",
            Accent::Blue => "border-blue-800/30",
            Accent::Purple => "border-purple-800/30",
            _ => "border-amber-800/30",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Accent::Red => "text-red-500",
            Accent::Amber => "text-amber-500",
            Accent::Emerald => "text-emerald-400",
            Accent::Blue => "text-blue-400",
            Accent::Purple => "text-purple-400",
            Accent::Cyan => "text-cyan-400",
            Accent::Green => "text-green-400",
            Accent::Yellow => "text-yellow-400",
        }
    }

    /// Solid dot plus its translucent halo
    pub fn dot(&self) -> (&'static str, &'static str) {
        match self {
            Accent::Red => ("bg-red-500", "bg-red-500/20"),
            Accent::Amber => ("bg-amber-500", "bg-amber-500/20"),
            Accent::Emerald => ("bg-emerald-500", "bg-emerald-500/20"),
            Accent::Blue => ("bg-blue-500", "bg-blue-500/20"),
            Accent::Purple => ("bg-purple-500", "bg-purple-500/20"),
            Accent::Cyan => ("bg-cyan-500", "bg-cyan-500/20"),
            Accent::Green => ("bg-green-500", "bg-green-500/20"),
            Accent::Yellow => ("bg-yellow-500", "bg-yellow-500/20"),
        }
    }
}

/// Line-art glyphs drawn inline so they can take an accent colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    TrendingDown,
    TrendingUp,
    AlertTriangle,
    DollarSign,
    BarChart,
    Clock,
    Database,
    Brain,
    LineChart,
    Zap,
    Calendar,
    CloudRain,
}

/// A market problem shown in the problem statement grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemCard {
    pub glyph: Glyph,
    pub title: String,
    pub description: String,
    /// Reveal delay in seconds
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub accent: Accent,
}

impl ProblemCard {
    pub fn new(glyph: Glyph, title: &str, description: &str, delay: f32, accent: Accent) -> Self {
        Self {
            glyph,
            title: title.to_string(),
            description: description.to_string(),
            delay,
            accent,
        }
    }
}

/// A step of the model pipeline, also used for prediction factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStep {
    pub glyph: Glyph,
    pub accent: Accent,
    pub title: String,
    pub description: String,
}

impl FlowStep {
    pub fn new(glyph: Glyph, accent: Accent, title: &str, description: &str) -> Self {
        Self {
            glyph,
            accent,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Inputs the model claims to weigh; same shape as a flow step
pub type PredictionFactor = FlowStep;

/// Customer quote shown in the testimonial reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub avatar: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub commodity: Option<String>,
}

impl Testimonial {
    /// Maximum number of stars a card shows
    pub const MAX_RATING: u8 = 5;

    /// Filled stars, clamped to the five-star scale
    pub fn stars(&self) -> u8 {
        self.rating.min(Self::MAX_RATING)
    }

    /// Whether the star at `index` (0-based) is filled
    pub fn is_star_filled(&self, index: u8) -> bool {
        index < self.stars()
    }
}

/// Selectable option used for crops and markets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

impl Choice {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

pub type Crop = Choice;
pub type Market = Choice;

/// Find the display name for `id` in a list of choices
pub fn choice_name<'a>(choices: &'a [Choice], id: &str) -> Option<&'a str> {
    choices
        .iter()
        .find(|choice| choice.id == id)
        .map(|choice| choice.name.as_str())
}

/// Bullet point next to the demo video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoHighlight {
    pub accent: Accent,
    pub text: String,
}

/// Titled link in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub title: String,
    pub href: String,
}

impl FooterLink {
    pub fn new(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
        }
    }
}

/// Social profiles; a missing entry hides its icon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// Present links as `(network, icon, url)` in display order
    pub fn entries(&self) -> Vec<(&'static str, &'static str, String)> {
        [
            ("Facebook", "facebook", &self.facebook),
            ("Twitter", "twitter", &self.twitter),
            ("Instagram", "instagram", &self.instagram),
            ("LinkedIn", "linkedin", &self.linkedin),
        ]
        .into_iter()
        .filter_map(|(label, icon, url)| url.clone().map(|url| (label, icon, url)))
        .collect()
    }
}

/// Footer contact column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI with spaces, dashes and parentheses stripped
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: "contact@agripredictai.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Innovation Drive, AgTech Valley, CA 94103".to_string(),
        }
    }
}

/// Number of footer links listed under "Quick Links"; the rest go to "Resources"
pub const QUICK_LINK_COUNT: usize = 4;

/// Split footer navigation into the quick-links and resources columns
pub fn split_footer_links(links: &[FooterLink]) -> (&[FooterLink], &[FooterLink]) {
    links.split_at(QUICK_LINK_COUNT.min(links.len()))
}

pub const PRODUCT_NAME: &str = "AgriPredict";
pub const COMPANY_NAME: &str = "AgriPredict AI";
pub const COMMODITY_COUNT: u32 = 22;
pub const REPORTING_CENTRE_COUNT: u32 = 550;

pub const HERO_BACKGROUND: &str = "https://images.unsplash.com/photo-1523348837708-15d4a09cfac2?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
pub const PROBLEM_BACKGROUND: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2073&q=80";
pub const DEMO_VIDEO_URL: &str = "https://storage.googleapis.com/your-demo-video.mp4";
pub const DEMO_POSTER: &str = HERO_BACKGROUND;
pub const COMPANY_LOGO: &str = "/logo.svg";
pub const LOGO_FALLBACK: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=agripredict";

pub fn default_problems() -> Vec<ProblemCard> {
    vec![
        ProblemCard::new(
            Glyph::TrendingDown,
            "Extreme Price Volatility",
            "Unpredictable market fluctuations create planning uncertainty, reduce profit margins for farmers, and cause financial instability throughout the agricultural sector.",
            0.1,
            Accent::Red,
        ),
        ProblemCard::new(
            Glyph::AlertTriangle,
            "Critical Information Gaps",
            "Limited access to accurate, real-time market data leads to uninformed decisions, missed opportunities, and inefficient resource allocation across the supply chain.",
            0.2,
            Accent::Amber,
        ),
        ProblemCard::new(
            Glyph::DollarSign,
            "Supply Chain Inefficiency",
            "Multiple intermediaries in the supply chain significantly reduce farmer earnings while increasing consumer prices, creating market distortions and economic inequity.",
            0.3,
            Accent::Emerald,
        ),
        ProblemCard::new(
            Glyph::BarChart,
            "Inadequate Forecasting",
            "Traditional prediction methods fail to account for complex market variables, leading to inaccurate projections and poor strategic planning for buffer stock management.",
            0.4,
            Accent::Blue,
        ),
        ProblemCard::new(
            Glyph::Clock,
            "Delayed Market Interventions",
            "Slow response to market fluctuations prevents timely interventions, allowing price spikes to impact vulnerable populations before corrective measures can be implemented.",
            0.5,
            Accent::Purple,
        ),
    ]
}

pub fn default_flow_steps() -> Vec<FlowStep> {
    vec![
        FlowStep::new(
            Glyph::Database,
            Accent::Blue,
            "Historical Data Training",
            "Training our model on extensive historical price data from 550 reporting centers to establish baseline patterns and trends.",
        ),
        FlowStep::new(
            Glyph::Brain,
            Accent::Purple,
            "Pattern Recognition",
            "Our algorithms learn to identify recurring patterns and correlations in price fluctuations across different agricultural commodities.",
        ),
        FlowStep::new(
            Glyph::LineChart,
            Accent::Green,
            "Price Prediction",
            "Generating future price forecasts for 22 essential food commodities based on learned patterns and seasonal factors.",
        ),
        FlowStep::new(
            Glyph::Zap,
            Accent::Yellow,
            "Model Refinement",
            "Continuously improving our prediction model by incorporating new historical data and refining our algorithms.",
        ),
    ]
}

pub fn default_prediction_factors() -> Vec<PredictionFactor> {
    vec![
        FlowStep::new(
            Glyph::Calendar,
            Accent::Emerald,
            "Seasonal Patterns",
            "Analyzing historical crop cycles and seasonal price fluctuations",
        ),
        FlowStep::new(
            Glyph::BarChart,
            Accent::Blue,
            "Production Estimates",
            "Incorporating current and projected crop sowing and yield data",
        ),
        FlowStep::new(
            Glyph::TrendingUp,
            Accent::Purple,
            "Market Trends",
            "Identifying emerging price patterns and market dynamics",
        ),
        FlowStep::new(
            Glyph::CloudRain,
            Accent::Cyan,
            "Environmental Factors",
            "Accounting for weather patterns and climate impacts on production",
        ),
    ]
}

pub fn default_crops() -> Vec<Crop> {
    vec![
        Choice::new("1", "Wheat"),
        Choice::new("2", "Rice"),
        Choice::new("3", "Corn"),
        Choice::new("4", "Soybeans"),
        Choice::new("5", "Cotton"),
    ]
}

pub fn default_markets() -> Vec<Market> {
    vec![
        Choice::new("1", "Chicago"),
        Choice::new("2", "New York"),
        Choice::new("3", "Tokyo"),
        Choice::new("4", "London"),
        Choice::new("5", "Mumbai"),
    ]
}

pub fn default_demo_highlights() -> Vec<DemoHighlight> {
    vec![
        DemoHighlight {
            accent: Accent::Green,
            text: "Maintains buffer stock of pulses (gram, tur, urad, moon, masur) and onion for strategic market interventions".to_string(),
        },
        DemoHighlight {
            accent: Accent::Blue,
            text: "Decisions for market interventions based on price trends, seasonality, and market intelligence".to_string(),
        },
        DemoHighlight {
            accent: Accent::Purple,
            text: "Uses ARIMA based economic models to examine and forecast prices of pulses".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn testimonial(
    id: u32,
    name: &str,
    role: &str,
    company: &str,
    seed: &str,
    content: &str,
    rating: u8,
    highlight: &str,
    commodity: &str,
) -> Testimonial {
    Testimonial {
        id,
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed),
        content: content.to_string(),
        rating,
        highlight: Some(highlight.to_string()),
        commodity: Some(commodity.to_string()),
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            1,
            "Rajesh Sharma",
            "Agricultural Officer",
            "Ministry of Agriculture",
            "rajesh",
            "This AI prediction tool has revolutionized how we monitor essential commodity prices. The accuracy of predictions has helped us implement timely market interventions, stabilizing prices during volatile periods.",
            5,
            "95% prediction accuracy",
            "Rice",
        ),
        testimonial(
            2,
            "Priya Patel",
            "Wholesale Trader",
            "Kisan Mandi",
            "priya",
            "As a wholesale trader dealing with multiple commodities, this tool gives me a competitive edge. I can now anticipate price trends weeks in advance, allowing me to optimize my inventory and maximize profits.",
            5,
            "32% profit increase",
            "Wheat",
        ),
        testimonial(
            3,
            "Anand Verma",
            "Small Farm Owner",
            "Verma Organic Farms",
            "anand",
            "Before using this platform, I was constantly at the mercy of middlemen for price information. Now I have data-backed insights that have increased my bargaining power and improved my income significantly.",
            4,
            "40% better prices",
            "Pulses",
        ),
        testimonial(
            4,
            "Sunita Reddy",
            "Supply Chain Director",
            "FreshFoods India Ltd.",
            "sunita",
            "The predictive analytics have transformed our procurement strategy. We're now able to forecast price trends for pulses and grains with remarkable accuracy, reducing costs and ensuring consistent supply to our customers.",
            5,
            "28% cost reduction",
            "Vegetables",
        ),
        testimonial(
            5,
            "Vikram Singh",
            "Policy Researcher",
            "National Institute of Agricultural Economics",
            "vikram",
            "This platform provides invaluable data for our policy research. The AI-driven price predictions help us formulate evidence-based recommendations for government interventions in agricultural markets.",
            5,
            "Data-driven policy",
            "Onions",
        ),
        testimonial(
            6,
            "Meera Krishnan",
            "Cooperative Society Manager",
            "Tamil Nadu Farmers Cooperative",
            "meera",
            "Our cooperative has seen tremendous benefits from using this prediction tool. We can now advise our 2,000+ farmer members on optimal timing for selling their produce, resulting in better collective bargaining and higher returns.",
            5,
            "Helped 2,000+ farmers",
            "Lentils",
        ),
        testimonial(
            7,
            "Arjun Nair",
            "Agri-tech Entrepreneur",
            "FarmTech Solutions",
            "arjun",
            "We've integrated this AI prediction system into our farm management platform, and our users are seeing incredible results. The price forecasting accuracy has been a game-changer for small farmers.",
            5,
            "10,000+ users",
            "Potatoes",
        ),
        testimonial(
            8,
            "Lakshmi Devi",
            "Market Committee Chairperson",
            "Karnataka State Agricultural Marketing Board",
            "lakshmi",
            "This tool has transformed how we manage our agricultural markets. The predictive insights allow us to better prepare for price fluctuations and ensure fair practices across all our mandis.",
            5,
            "Statewide implementation",
            "Tomatoes",
        ),
    ]
}

pub fn default_footer_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new("Home", "/"),
        FooterLink::new("About", "/about"),
        FooterLink::new("Features", "/features"),
        FooterLink::new("Pricing", "/pricing"),
        FooterLink::new("Blog", "/blog"),
        FooterLink::new("Contact", "/contact"),
        FooterLink::new("Privacy Policy", "/privacy"),
        FooterLink::new("Terms of Service", "/terms"),
    ]
}

pub fn default_social_links() -> SocialLinks {
    SocialLinks {
        facebook: Some("https://facebook.com".to_string()),
        twitter: Some("https://twitter.com".to_string()),
        instagram: Some("https://instagram.com".to_string()),
        linkedin: Some("https://linkedin.com".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_have_expected_sizes() {
        assert_eq!(default_problems().len(), 5);
        assert_eq!(default_flow_steps().len(), 4);
        assert_eq!(default_prediction_factors().len(), 4);
        assert_eq!(default_testimonials().len(), 8);
        assert_eq!(default_crops().len(), 5);
        assert_eq!(default_markets().len(), 5);
        assert_eq!(default_footer_links().len(), 8);
    }

    #[test]
    fn test_problem_delays_increase() {
        let delays: Vec<f32> = default_problems().iter().map(|p| p.delay).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_accent_fallback_to_amber() {
        assert_eq!(Accent::Cyan.card_gradient(), Accent::Amber.card_gradient());
        assert_eq!(Accent::Yellow.card_border(), "border-amber-800/30");
        assert_eq!(Accent::Red.card_border(), "border-red-800/30");
    }

    #[test]
    fn test_testimonial_stars_are_clamped() {
        let mut t = default_testimonials().remove(2);
        assert_eq!(t.stars(), 4);
        assert!(t.is_star_filled(3));
        assert!(!t.is_star_filled(4));

        t.rating = 9;
        assert_eq!(t.stars(), 5);
        assert!(t.is_star_filled(4));
    }

    #[test]
    fn test_testimonial_ids_are_unique() {
        let testimonials = default_testimonials();
        let mut ids: Vec<u32> = testimonials.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), testimonials.len());
    }

    #[test]
    fn test_choice_name_lookup() {
        let crops = default_crops();
        assert_eq!(choice_name(&crops, "2"), Some("Rice"));
        assert_eq!(choice_name(&crops, "42"), None);
    }

    #[test]
    fn test_split_footer_links() {
        let links = default_footer_links();
        let (quick, resources) = split_footer_links(&links);
        assert_eq!(quick.len(), 4);
        assert_eq!(quick[0].title, "Home");
        assert_eq!(resources.len(), 4);
        assert_eq!(resources[0].title, "Blog");

        let short = vec![FooterLink::new("Home", "/")];
        let (quick, resources) = split_footer_links(&short);
        assert_eq!(quick.len(), 1);
        assert!(resources.is_empty());
    }

    #[test]
    fn test_social_entries_skip_missing() {
        let links = SocialLinks {
            twitter: Some("https://twitter.com/agri".to_string()),
            ..Default::default()
        };
        let entries = links.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "Twitter");
        assert_eq!(default_social_links().entries().len(), 4);
    }

    #[test]
    fn test_testimonial_deserializes_without_optional_fields() {
        let json = r#"{"id":9,"name":"A","role":"B","company":"C","avatar":"x","content":"y","rating":3}"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(t.highlight, None);
        assert_eq!(t.commodity, None);
        assert_eq!(t.stars(), 3);
    }

    #[test]
    fn test_contact_links() {
        let contact = ContactDetails::default();
        assert_eq!(contact.mailto(), "mailto:contact@agripredictai.com");
        assert_eq!(contact.tel(), "tel:+15551234567");
    }
}
