pub const PAGE: &str = "min-h-screen bg-gradient-to-b from-[oklch(0.16_0.04_250)] to-[oklch(0.11_0.03_250)] text-[oklch(0.92_0.01_85)] relative";
pub const PAGE_PLAIN: &str = "min-h-screen bg-[oklch(0.08_0.01_250)] text-[oklch(0.92_0.01_85)]";
pub const CONTAINER: &str = "container max-w-5xl mx-auto px-4";
pub const CONTAINER_NARROW: &str = "container max-w-3xl mx-auto px-4";

pub const NAV: &str = "fixed top-0 z-40 w-full bg-[oklch(0.10_0.02_250)]/70 backdrop-blur-md border-b border-[oklch(0.75_0.15_85)]/10";
pub const NAV_INNER: &str = "max-w-6xl mx-auto h-16 px-4 flex items-center justify-between";
pub const NAV_BRAND: &str = "text-xl font-bold tracking-tight hover:opacity-80 transition-opacity";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-[oklch(0.75_0.15_85)] hover:text-[oklch(0.85_0.15_85)] transition-colors duration-200";
pub const FOOTER: &str = "border-t border-[oklch(0.75_0.15_85)]/10 py-12 px-4 text-center";
pub const FOOTER_TEXT: &str = "text-sm text-[oklch(0.55_0.03_85)]";

pub const GOLD: &str = "text-[oklch(0.75_0.15_85)]";
pub const GOLD_BRIGHT: &str = "text-[oklch(0.85_0.15_85)]";
pub const TEXT_MUTED: &str = "text-[oklch(0.65_0.03_85)]";
pub const TEXT_FAINT: &str = "text-[oklch(0.55_0.03_85)]";

pub const HERO_SECTION: &str = "min-h-screen flex flex-col items-center justify-center px-4 relative z-10";
pub const HERO_TITLE: &str = "text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold mb-3 sm:mb-4 text-[oklch(0.85_0.15_85)] tracking-tight font-['Playfair_Display']";
pub const HERO_SUBTITLE: &str = "text-base sm:text-lg md:text-xl lg:text-2xl text-[oklch(0.75_0.15_85)] font-light mb-10 sm:mb-12 tracking-wide";
pub const SECTION: &str = "py-12 sm:py-16 md:py-20 px-4 relative z-10";
pub const SECTION_TITLE: &str = "text-3xl sm:text-4xl md:text-5xl font-bold mb-6 sm:mb-8 text-[oklch(0.75_0.15_85)]";

pub const SERVICE_GRID: &str = "grid sm:grid-cols-2 lg:grid-cols-3 gap-8 sm:gap-10 md:gap-12";
pub const SERVICE_CARD: &str = "group relative backdrop-blur-sm rounded-2xl p-6 sm:p-8 border transition-all duration-500 hover:scale-105 text-center";

pub const GOLD_OUTLINE_BUTTON: &str = "group inline-flex items-center gap-3 px-8 py-4 rounded-xl border-2 border-[oklch(0.75_0.15_85)]/40 bg-transparent hover:bg-[oklch(0.75_0.15_85)]/10 transition-all duration-300 hover:scale-105 hover:border-[oklch(0.75_0.15_85)] hover:shadow-[0_0_30px_rgba(212,175,55,0.2)]";
pub const GOLD_BUTTON: &str = "w-full bg-gradient-to-b from-[oklch(0.80_0.15_85)] to-[oklch(0.65_0.15_85)] text-[oklch(0.15_0.05_250)] hover:from-[oklch(0.85_0.15_85)] hover:to-[oklch(0.70_0.15_85)] font-bold text-base sm:text-lg py-3 sm:py-4 rounded-lg shadow-[0_4px_12px_rgba(212,175,55,0.3)] disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-200 active:scale-95";
pub const CLOSE_BUTTON: &str = "absolute top-3 right-3 w-8 h-8 rounded-full text-[oklch(0.65_0.03_85)] hover:text-[oklch(0.85_0.15_85)] hover:bg-white/5 transition-colors";

pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black/85 flex items-center justify-center z-50 p-4";
pub const MACHINE_FRAME: &str = "bg-gradient-to-b from-[#4a4a5a] via-[#2a2a3a] to-[#1a1a2a] rounded-2xl p-1.5 shadow-[0_0_60px_rgba(212,175,55,0.15)]";
pub const MACHINE_FACE: &str = "relative bg-gradient-to-b from-[oklch(0.18_0.04_250)] to-[oklch(0.12_0.03_250)] rounded-xl p-5 sm:p-6 border border-[oklch(0.75_0.15_85)]/20";
pub const REEL_WINDOW: &str = "bg-[oklch(0.06_0.01_250)] rounded-lg p-3 sm:p-4 mb-4 border border-[#3a3a4a]/50 shadow-inner";
pub const REEL: &str = "flex items-center justify-center w-16 h-20 sm:w-20 sm:h-24 rounded-lg text-4xl sm:text-5xl font-bold transition-all duration-300";

pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-[oklch(0.12_0.02_250)] py-2 px-3 text-[oklch(0.92_0.01_85)] ring-1 ring-inset ring-[oklch(0.75_0.15_85)]/30 placeholder:text-[oklch(0.45_0.03_85)] focus:ring-2 focus:ring-[oklch(0.75_0.15_85)]";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-[oklch(0.12_0.02_250)] py-2 px-3 text-[oklch(0.92_0.01_85)] ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-red-500";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-left text-[oklch(0.75_0.15_85)]";
pub const TEXT_ERROR: &str = "text-sm text-left text-red-400 mt-1";

pub const TOAST_STACK: &str = "fixed top-20 right-4 sm:right-6 z-[110] flex flex-col gap-3 max-w-sm";
pub const TOAST_SUCCESS: &str = "bg-green-950/90 border border-green-700 text-green-100 px-4 py-3 rounded-lg shadow-lg animate-fade-in";
pub const TOAST_ERROR: &str = "bg-red-950/90 border border-red-700 text-red-100 px-4 py-3 rounded-lg shadow-lg animate-fade-in";
pub const TOAST_INFO: &str = "bg-[oklch(0.18_0.04_250)]/95 border border-[oklch(0.75_0.15_85)]/50 text-[oklch(0.85_0.15_85)] px-4 py-3 rounded-lg shadow-lg animate-fade-in";

pub const BLOG_CARD: &str = "block bg-[oklch(0.12_0.02_250)] border border-[oklch(0.75_0.15_85)]/10 rounded-2xl p-6 sm:p-8 hover:border-[oklch(0.75_0.15_85)]/40 transition-all duration-300 hover:-translate-y-1";
pub const CATEGORY_BADGE: &str = "inline-block px-4 py-1 bg-gradient-to-r from-[oklch(0.75_0.15_85)]/20 to-[oklch(0.65_0.15_85)]/20 border border-[oklch(0.75_0.15_85)]/30 rounded-full text-sm text-[oklch(0.75_0.15_85)] font-medium";
pub const PROSE_H2: &str = "text-2xl sm:text-3xl font-bold mt-10 mb-4 text-[oklch(0.85_0.15_85)]";
pub const PROSE_H3: &str = "text-xl sm:text-2xl font-bold mt-8 mb-3 text-[oklch(0.85_0.15_85)]";
pub const PROSE_P: &str = "text-lg leading-relaxed mb-5 text-[oklch(0.75_0.03_85)]";
pub const PROSE_LIST: &str = "list-disc pl-6 mb-5 space-y-1 text-lg text-[oklch(0.75_0.03_85)] marker:text-[oklch(0.75_0.15_85)]";
pub const PROSE_ORDERED: &str = "list-decimal pl-6 mb-5 space-y-1 text-lg text-[oklch(0.75_0.03_85)] marker:text-[oklch(0.75_0.15_85)]";
pub const PROSE_STRONG: &str = "font-semibold text-[oklch(0.85_0.15_85)]";
pub const PROSE_LINK: &str = "text-[oklch(0.75_0.15_85)] hover:text-[oklch(0.85_0.15_85)] underline decoration-[oklch(0.75_0.15_85)]/40";
