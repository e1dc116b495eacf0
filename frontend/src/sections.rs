use yew::prelude::*;
use crate::styles::*;

struct Feature {
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Banner {
    icon: &'static str,
    badge: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🏆",
        accent: "text-orange-500",
        title: "Gamified Rewards",
        description: "Create engaging reward systems that motivate customers to interact with your brand regularly through points, and tiered sweepstake rewards.",
    },
    Feature {
        icon: "👥",
        accent: "text-yellow-500",
        title: "Everyday Engagement",
        description: "Build lasting relationships through personalized interactions, challenges, and community features that keep customers coming back.",
    },
    Feature {
        icon: "📊",
        accent: "text-teal-500",
        title: "Data-Driven Insights",
        description: "Leverage powerful analytics to understand customer behavior, optimize engagement strategies, and measure ROI effectively.",
    },
];

const PRICING: [Banner; 2] = [
    Banner {
        icon: "🏆",
        badge: "Fixed & Transparent",
        title: "Base Pricing",
        description: "Simple revenue-based pricing that scales with your business, with no hidden fees or surprises.",
        gradient: GRADIENT_WARM,
    },
    Banner {
        icon: "👥",
        badge: "High Volume",
        title: "Bespoke Pricing",
        description: "For enterprises with large customer bases or specialized needs, contact us for a tailored solution.",
        gradient: GRADIENT_VIOLET,
    },
];

const ROADMAP: [Banner; 3] = [
    Banner {
        icon: "🚀",
        badge: "Phase 1",
        title: "Pilot Launch",
        description: "Our initial platform rollout focuses on core engagement mechanics, customizable reward structures, and essential analytics.",
        gradient: GRADIENT_WARM,
    },
    Banner {
        icon: "🧠",
        badge: "Phase 2",
        title: "AI-Powered Insights",
        description: "Advanced machine learning models to predict customer behavior and personalize engagement strategies at scale.",
        gradient: GRADIENT_VIOLET,
    },
    Banner {
        icon: "🌿",
        badge: "Phase 3",
        title: "Green Rewards & Sustainability",
        description: "Eco-conscious rewards and sustainability tracking to help brands align customer engagement with environmental values.",
        gradient: GRADIENT_GREEN,
    },
];

const DASHBOARD_IMAGE: &str = "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=1200&q=80";

#[function_component]
pub fn Hero() -> Html {
    html! {
        <section class="relative px-4 pt-12 pb-16 md:pt-16 md:pb-20 md:px-6 lg:px-8">
            <div class="absolute inset-0 bg-gradient-to-br from-orange-50 via-yellow-50 to-teal-50 opacity-70"></div>
            <div class="max-w-6xl mx-auto relative">
                <div class="max-w-3xl mx-auto text-center">
                    <h1 class={HEADING_XL}>{"Engage, Reward, Retain"}</h1>
                    <p class="text-xl md:text-2xl text-gray-700 mb-8">
                        {"Transform customer interactions into meaningful relationships with our powerful engagement platform."}
                    </p>
                </div>
                <div class="mt-8 md:mt-12 max-w-4xl mx-auto">
                    <div class="relative rounded-2xl overflow-hidden shadow-xl">
                        <div class="relative pt-[56.25%]">
                            <div class="absolute inset-0 bg-gradient-to-br from-gray-800 to-gray-900 flex items-center justify-center">
                                <img src={DASHBOARD_IMAGE} alt="Platform dashboard" class="w-full h-full object-cover opacity-80" />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                                <div class="absolute bottom-6 left-6 right-6 text-white">
                                    <p class="text-xl font-medium">{"Powerful analytics and engagement tools"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Features() -> Html {
    html! {
        <section id="features" class={combine_classes(SECTION, "bg-white")}>
            <div class={SECTION_INNER}>
                <div class={SECTION_HEADER}>
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">{"Why Choose Our Platform"}</h2>
                    <p class={TEXT_LEAD}>
                        {"Our engagement platform helps businesses create meaningful connections with their customers."}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-8">
                    {for FEATURES.iter().map(|feature| html! {
                        <div class={CARD}>
                            <div class={classes!("mb-4", "text-4xl", feature.accent)}>{feature.icon}</div>
                            <h3 class="text-xl font-bold mb-2">{feature.title}</h3>
                            <p class={TEXT_BODY}>{feature.description}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

fn banner_card(banner: &Banner, icon_first: bool) -> Html {
    let icon = html! { <div class="opacity-90 text-4xl">{banner.icon}</div> };
    let badge = html! { <span class={BADGE}>{banner.badge}</span> };

    html! {
        <div class={CARD_BANNER}>
            <div class={classes!("p-5", "text-white", banner.gradient)}>
                <div class="flex items-center justify-between mb-2">
                    if icon_first { {icon} {badge} } else { {badge} {icon} }
                </div>
                <h3 class={HEADING_SM}>{banner.title}</h3>
            </div>
            <div class="p-5">
                <p class={TEXT_BODY}>{banner.description}</p>
            </div>
        </div>
    }
}

#[function_component]
pub fn Pricing() -> Html {
    html! {
        <section id="pricing" class={combine_classes(SECTION, "bg-white")}>
            <div class={SECTION_INNER}>
                <div class={SECTION_HEADER}>
                    <h2 class={combine_classes(HEADING_LG, "bg-gradient-to-r from-teal-500 via-purple-500 to-orange-500 bg-clip-text text-transparent")}>
                        {"Transparent Pricing, Lower than Legacy Loyalty Solutions"}
                    </h2>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8 mb-12">
                    {for PRICING.iter().map(|banner| banner_card(banner, true))}
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Roadmap() -> Html {
    html! {
        <section id="roadmap" class={combine_classes(SECTION, "bg-gray-50")}>
            <div class={SECTION_INNER}>
                <div class={SECTION_HEADER}>
                    <h2 class={combine_classes(HEADING_LG, "bg-gradient-to-r from-orange-500 via-purple-500 to-teal-500 bg-clip-text text-transparent")}>
                        {"Reimagining loyalty through gamification and engagement"}
                    </h2>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-8 mb-12">
                    {for ROADMAP.iter().map(|banner| banner_card(banner, false))}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub on_schedule_demo: Callback<()>,
}

#[function_component]
pub fn CallToAction(props: &CallToActionProps) -> Html {
    let onclick = props.on_schedule_demo.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <section id="cta" class={SECTION}>
            <div class={SECTION_INNER}>
                <div class="rounded-2xl overflow-hidden relative">
                    <div class="absolute inset-0 bg-gradient-to-r from-orange-600 to-yellow-500"></div>
                    <div class="relative z-10 py-12 px-6 md:px-12 lg:px-16 text-center">
                        <h2 class="text-2xl md:text-3xl font-bold text-white mb-4">
                            {"Ready to Transform Your Customer Engagement?"}
                        </h2>
                        <p class="text-lg md:text-xl text-white/90 max-w-2xl mx-auto mb-8">
                            {"Join the growing list of businesses that are creating meaningful connections with their customers."}
                        </p>
                        <div class="flex justify-center">
                            <a href="#contact" {onclick} class={button(BUTTON_OUTLINE)}>{"Schedule a Demo"}</a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
