use shared::constants::SITE_NAME;
use yew::prelude::*;

use crate::base::Base;
use crate::components::{Countdown, ViewCounter};
use crate::pages::reveal::ContactReveal;
use crate::styles;

struct Service {
    icon: &'static str,
    title: &'static str,
    tagline: &'static str,
    card: &'static str,
    badge: &'static str,
    title_color: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "🎙️",
        title: "Podcastit",
        tagline: "Ääni, joka kantaa – strategiset siirrot podcasteina",
        card: "bg-gradient-to-br from-purple-600/10 to-purple-900/20 border-purple-500/20 hover:border-purple-400/40 hover:shadow-[0_0_40px_rgba(168,85,247,0.15)]",
        badge: "from-purple-500/30 to-purple-700/30",
        title_color: "text-[#c4b5fd]",
    },
    Service {
        icon: "🎬",
        title: "Klipit",
        tagline: "Nopeat voitot – iskevät klipit, jotka jäävät mieleen",
        card: "bg-gradient-to-br from-red-600/10 to-red-900/20 border-red-500/20 hover:border-red-400/40 hover:shadow-[0_0_40px_rgba(239,68,68,0.15)]",
        badge: "from-red-500/30 to-red-700/30",
        title_color: "text-[#fca5a5]",
    },
    Service {
        icon: "✨",
        title: "Muu sisältö",
        tagline: "Jokeri hihassa – luovat ratkaisut kaikkiin mediatarpeisiin",
        card: "bg-gradient-to-br from-teal-600/10 to-teal-900/20 border-teal-500/20 hover:border-teal-400/40 hover:shadow-[0_0_40px_rgba(20,184,166,0.15)]",
        badge: "from-teal-500/30 to-teal-700/30",
        title_color: "text-[#99f6e4]",
    },
];

// Faint slot symbols behind the page: placement, look and glyph.
const BACKDROP_SYMBOLS: [(&str, &str, &str); 12] = [
    ("top-[3%] left-[3%]", "text-5xl sm:text-7xl font-bold animate-spin-slow text-amber-500/[0.08]", "7"),
    ("top-[8%] right-[8%]", "text-6xl sm:text-8xl font-bold animate-pulse-slow text-amber-400/[0.07]", "7"),
    ("top-[25%] right-[25%]", "text-3xl sm:text-5xl font-bold tracking-wider animate-bounce-slow text-amber-500/[0.07]", "BAR"),
    ("top-[15%] left-[55%]", "text-5xl sm:text-6xl animate-spin-reverse text-red-400/[0.07]", "🍒"),
    ("top-[10%] left-[75%]", "text-5xl sm:text-7xl animate-pulse-slow text-cyan-400/[0.06]", "💎"),
    ("top-[30%] right-[12%]", "text-4xl sm:text-6xl animate-bounce-slow text-yellow-400/[0.07]", "🔔"),
    ("top-[60%] right-[30%]", "text-5xl sm:text-7xl animate-spin-reverse text-amber-300/[0.07]", "⭐"),
    ("top-[72%] right-[8%]", "text-5xl sm:text-7xl font-bold animate-float text-red-500/[0.06]", "7"),
    ("top-[78%] left-[30%]", "text-3xl sm:text-5xl font-bold tracking-wider animate-bounce-slow text-amber-500/[0.07]", "BAR"),
    ("top-[88%] left-[60%]", "text-4xl sm:text-5xl animate-pulse-slow text-cyan-400/[0.06]", "💎"),
    ("top-[38%] left-[48%]", "text-3xl sm:text-4xl animate-bounce-slow text-green-400/[0.06]", "🍋"),
    ("top-[50%] left-[65%]", "text-6xl sm:text-8xl font-bold animate-pulse-slow text-amber-500/[0.05]", "7"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Base>
            <div class="fixed inset-0 pointer-events-none overflow-hidden z-0" aria-hidden="true">
                { for BACKDROP_SYMBOLS.iter().map(|(position, look, glyph)| html! {
                    <div class={classes!("absolute", *position, *look)}>{*glyph}</div>
                }) }
            </div>

            <section class={styles::HERO_SECTION}>
                <div class="text-center animate-fade-in">
                    <h1 class={styles::HERO_TITLE}>{SITE_NAME}</h1>
                    <p class={styles::HERO_SUBTITLE}>{"Pelin säännöt sanelevat sisällön"}</p>
                </div>
                <ViewCounter />
            </section>

            <section class="py-8 sm:py-12 md:py-16 px-4 relative z-10">
                <div class={styles::CONTAINER}>
                    <h2 class={classes!("text-2xl", "sm:text-3xl", "md:text-4xl", "font-light", "text-center", "mb-10", "sm:mb-14", styles::GOLD)}>
                        {"Matilda Media jakaa pöydän: podcastit, klipit ja muun sisällön:"}
                    </h2>
                    <div class={styles::SERVICE_GRID}>
                        { for SERVICES.iter().map(|service| html! {
                            <div key={service.title} class={classes!(styles::SERVICE_CARD, service.card)}>
                                <div class="mb-5 sm:mb-6 flex justify-center">
                                    <div class={classes!(
                                        "w-16", "h-16", "sm:w-20", "sm:h-20", "rounded-full", "bg-gradient-to-br",
                                        "flex", "items-center", "justify-center", "text-3xl", "sm:text-4xl",
                                        service.badge,
                                    )}>
                                        {service.icon}
                                    </div>
                                </div>
                                <h3 class={classes!("text-xl", "sm:text-2xl", "font-bold", "mb-3", "sm:mb-4", service.title_color)}>
                                    {service.title}
                                </h3>
                                <p class={classes!("text-base", "font-light", "px-2", styles::TEXT_MUTED)}>{service.tagline}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-16 sm:py-20 md:py-24 px-4 relative z-10">
                <div class={classes!(styles::CONTAINER_NARROW, "text-center")}>
                    <h2 class={styles::SECTION_TITLE}>{"Tietoa Matilda Mediasta:"}</h2>
                    <div class={classes!("text-base", "sm:text-lg", "font-light", "space-y-4", "sm:space-y-6", "px-4", styles::TEXT_MUTED)}>
                        <p>{"Matilda Media on erikoistunut uhkapeliteemaiseen mediaan: podcasteihin, klippeihin, äänityksiin, videoihin ja valokuviin, jotka resonoivat yleisön kanssa."}</p>
                        <p>{"Yli 22 miljoonaa orgaanista näyttökertaa kotiuttavat sen, että me osaamme luoda sisältöä, joka leviää ja jää mieleen."}</p>
                        <p class={classes!("font-medium", styles::GOLD)}>{"Peli on jo käynnissä – oletko mukana?"}</p>
                    </div>
                </div>
            </section>

            <section class={styles::SECTION}>
                <div class="container max-w-4xl mx-auto text-center">
                    <h2 class={classes!("text-2xl", "sm:text-3xl", "md:text-4xl", "font-light", "mb-3", "sm:mb-4", styles::TEXT_MUTED)}>
                        {"Uusi aikakausi alkaa pian..."}
                    </h2>
                    <p class={classes!("text-sm", "sm:text-base", "md:text-lg", "font-light", "mb-6", "sm:mb-8", "px-4", styles::TEXT_FAINT)}>
                        {"1. heinäkuuta 2027 klo 00:00"}
                    </p>
                    <Countdown />
                    <p class="mt-6 text-xs sm:text-sm text-[oklch(0.45_0.03_85)] font-light italic">{"Oletko valmis?"}</p>
                </div>
            </section>

            <section id="contact" class="py-16 sm:py-20 md:py-24 px-4 pb-[30vh] sm:pb-[25vh] border-t border-[oklch(0.75_0.15_85)]/20 relative z-10">
                <div class="container max-w-2xl mx-auto text-center">
                    <ContactReveal />
                </div>
            </section>
        </Base>
    }
}
