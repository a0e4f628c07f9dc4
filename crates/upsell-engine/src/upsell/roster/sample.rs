use super::super::domain::{EngagementSignals, FeatureUsage, SubscriptionPlan, UpsellUser};

struct SampleUser {
    id: &'static str,
    name: &'static str,
    title: &'static str,
    company: &'static str,
    email: &'static str,
    plan: SubscriptionPlan,
    features: &'static [(&'static str, u32)],
    metrics: (f64, f64, f64, u32, f64),
    last_active: &'static str,
    preferred_upgrade: &'static str,
    blockers: &'static [&'static str],
    narrative: &'static str,
}

const SAMPLE_USERS: &[SampleUser] = &[
    SampleUser {
        id: "usr-ava-thompson",
        name: "Ava Thompson",
        title: "Revenue Operations Lead",
        company: "Brightline Logistics",
        email: "ava.thompson@brightline.example",
        plan: SubscriptionPlan::Free,
        features: &[("AI Assist", 46), ("Usage Insights", 31), ("Workflow Builder", 18)],
        metrics: (22.0, 0.82, 0.88, 9, 0.75),
        last_active: "12 minutes ago",
        preferred_upgrade: "Premium",
        blockers: &["Needs SSO before rolling out to finance"],
        narrative: "Automated weekly pipeline reviews with AI Assist and invited four teammates in the last sprint.",
    },
    SampleUser {
        id: "usr-marcus-lee",
        name: "Marcus Lee",
        title: "Director of Customer Success",
        company: "Northwind Health",
        email: "marcus.lee@northwind.example",
        plan: SubscriptionPlan::Basic,
        features: &[("Usage Insights", 38), ("AI Assist", 29), ("Team Dashboards", 22)],
        metrics: (20.0, 0.8, 0.78, 12, 0.7),
        last_active: "1 hour ago",
        preferred_upgrade: "Premium",
        blockers: &["Seat cap reached on Basic"],
        narrative: "Hit the Basic seat ceiling and is exporting dashboards weekly for executive reviews.",
    },
    SampleUser {
        id: "usr-priya-natarajan",
        name: "Priya Natarajan",
        title: "VP of Operations",
        company: "Helix Biotech",
        email: "priya.natarajan@helix.example",
        plan: SubscriptionPlan::Premium,
        features: &[("Workflow Builder", 41), ("AI Assist", 35), ("Audit Trail", 12)],
        metrics: (21.0, 0.91, 0.86, 12, 0.8),
        last_active: "Yesterday",
        preferred_upgrade: "Enterprise",
        blockers: &["Procurement requires annual contract"],
        narrative: "Runs every quarterly close through Workflow Builder; asked about dedicated support twice.",
    },
    SampleUser {
        id: "usr-lena-fischer",
        name: "Lena Fischer",
        title: "Growth Marketing Manager",
        company: "Kestrel Apparel",
        email: "lena.fischer@kestrel.example",
        plan: SubscriptionPlan::Free,
        features: &[("AI Assist", 33), ("Campaign Templates", 19)],
        metrics: (19.0, 0.7, 0.8, 7, 0.65),
        last_active: "3 hours ago",
        preferred_upgrade: "Basic",
        blockers: &[],
        narrative: "Generates campaign briefs with AI Assist daily and has hit the free template limit.",
    },
    SampleUser {
        id: "usr-hannah-becker",
        name: "Hannah Becker",
        title: "Product Analyst",
        company: "Orbit Fintech",
        email: "hannah.becker@orbit.example",
        plan: SubscriptionPlan::Free,
        features: &[("Usage Insights", 21), ("AI Assist", 14)],
        metrics: (15.0, 0.61, 0.57, 6, 0.5),
        last_active: "Today",
        preferred_upgrade: "Basic",
        blockers: &["Waiting on budget approval"],
        narrative: "Building retention reports for leadership and requested a longer history window.",
    },
    SampleUser {
        id: "usr-omar-haddad",
        name: "Omar Haddad",
        title: "Engineering Manager",
        company: "Cobalt Systems",
        email: "omar.haddad@cobalt.example",
        plan: SubscriptionPlan::Basic,
        features: &[("Team Dashboards", 17), ("Usage Insights", 11)],
        metrics: (12.0, 0.58, 0.52, 8, 0.45),
        last_active: "2 days ago",
        preferred_upgrade: "Premium",
        blockers: &["Evaluating a competing tool"],
        narrative: "Steady usage across the team; integrations tab visited several times without setup.",
    },
    SampleUser {
        id: "usr-diego-alvarez",
        name: "Diego Alvarez",
        title: "Operations Coordinator",
        company: "Sierra Foods",
        email: "diego.alvarez@sierra.example",
        plan: SubscriptionPlan::Basic,
        features: &[("Workflow Builder", 9), ("AI Assist", 4)],
        metrics: (9.0, 0.48, 0.35, 4, 0.3),
        last_active: "4 days ago",
        preferred_upgrade: "Premium",
        blockers: &["Limited admin bandwidth"],
        narrative: "Uses core workflows for inventory checks; AI features mostly untouched.",
    },
    SampleUser {
        id: "usr-kenji-sato",
        name: "Kenji Sato",
        title: "Founder",
        company: "Tanuki Studio",
        email: "kenji.sato@tanuki.example",
        plan: SubscriptionPlan::Premium,
        features: &[("Campaign Templates", 6)],
        metrics: (6.0, 0.35, 0.22, 3, 0.15),
        last_active: "1 week ago",
        preferred_upgrade: "Premium annual",
        blockers: &["Seasonal usage dip"],
        narrative: "Small team with light usage outside of launch weeks.",
    },
];

impl SampleUser {
    fn to_user(&self) -> UpsellUser {
        let (login_frequency, feature_depth, ai_assist_usage, team_seats, expansion_signals) =
            self.metrics;
        UpsellUser {
            id: self.id.to_string(),
            name: self.name.to_string(),
            title: self.title.to_string(),
            company: self.company.to_string(),
            email: self.email.to_string(),
            plan: self.plan,
            features: self
                .features
                .iter()
                .map(|(name, frequency)| FeatureUsage {
                    name: name.to_string(),
                    frequency: *frequency,
                })
                .collect(),
            metrics: EngagementSignals {
                login_frequency,
                feature_depth,
                ai_assist_usage,
                team_seats,
                expansion_signals,
            },
            last_active: self.last_active.to_string(),
            preferred_upgrade: self.preferred_upgrade.to_string(),
            blockers: self.blockers.iter().map(|item| item.to_string()).collect(),
            narrative: self.narrative.to_string(),
        }
    }
}

pub(crate) fn sample_users() -> Vec<UpsellUser> {
    SAMPLE_USERS.iter().map(SampleUser::to_user).collect()
}
