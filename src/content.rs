//! Static page copy: nav sections, hero text, how-to-buy steps, tokenomics,
//! roadmap, FAQ entries, and social links.

pub const BRAND: &str = "TomCoin";
pub const WINDOW_TITLE: &str = "TomCoin — the most memeable meme coin";

/// Id of the section the page opens on.
pub const HOME_ID: &str = "home";

/// A logical page section reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: [Section; 6] = [
    Section {
        id: HOME_ID,
        label: "home",
    },
    Section {
        id: "about",
        label: "about",
    },
    Section {
        id: "how-to-buy",
        label: "how to buy",
    },
    Section {
        id: "tokenomics",
        label: "tokenomics",
    },
    Section {
        id: "roadmap",
        label: "roadmap",
    },
    Section {
        id: "faq",
        label: "faq",
    },
];

pub fn section_by_id(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

pub const HERO_TAGLINE: &str = "The most memeable, memorable, ridiculous, and \
    insane meme coin. The dogs have had their day, it's time for humans to \
    take reign again - daddy's home!";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "TomCoin (TOM) is a meme coin that operates on the Ethereum blockchain. \
     It was created as a tribute to the Supreme Leader of the Tom Cult, Mr. \
     Tom Style, who has gained enormous popularity and a cult following \
     amongst the next generation of entrepreneurs around the world through \
     his massively popular show: The Tom Style Show. TomCoin positions \
     itself purely as a meme coin.",
    "TomCoin is here to make meme coins great again. Launched stealth with \
     no presale, zero taxes, LP burnt and contract renounced, TOM is a coin \
     for the people, forever. Fueled by pure memetic power, let TOM show you \
     the way.",
];

pub struct BuyStep {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const BUY_STEPS: [BuyStep; 4] = [
    BuyStep {
        title: "Create a Wallet",
        blurb: "Download metamask or your wallet of choice from the app \
                store or google play store for free.",
    },
    BuyStep {
        title: "Get Some ETH",
        blurb: "Have ETH in your wallet to swap to TOM. If you don't have \
                any ETH, you can buy directly on metamask.",
    },
    BuyStep {
        title: "Go to Uniswap",
        blurb: "Connect to uniswap. Go to app.uniswap.org in google chrome \
                or on the browser inside your metamask app.",
    },
    BuyStep {
        title: "Swap ETH to TOM",
        blurb: "Swap ETH to TOM. We have no taxes so you don't need to \
                worry about buying with a specific slippage.",
    },
];

pub const TOKEN_SUPPLY: &str = "420,690,000,000,000";

pub const TOKENOMICS_LINES: [&str; 2] = [
    "No Taxes. Period. It's that simple.",
    "LP tokens are burnt, and contract ownership is renounced.",
];

pub const ROADMAP_PHASES: [&str; 3] = [
    "Phase 1: Meme",
    "Phase 2: Vibe and HODL",
    "Phase 3: Meme Takeover",
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "What is TomCoin?",
        answer: "TomCoin (TOM) is a meme coin that operates on the Ethereum \
                 blockchain. It was created as a tribute to the Supreme \
                 Leader of the Tom Cult, Mr. Tom Style, who has gained \
                 enormous popularity and a cult following amongst the next \
                 generation of entrepreneurs around the world through his \
                 massively popular show: The Tom Style Show. TOM \
                 distinguishes itself by instituting a no-tax policy and \
                 being transparent about its lack of utility, keeping \
                 things simple as a meme coin.",
    },
    FaqEntry {
        question: "How does TomCoin Work?",
        answer: "TOM operates on the Ethereum blockchain as an ERC-20 \
                 token. It employs a redistribution system that rewards \
                 long-term stakers, and a burning mechanism whereby a \
                 portion of the coins are permanently removed from \
                 circulation on a regular basis. The Ethereum blockchain \
                 supports TOM through the Proof-of-Stake (PoS) consensus \
                 mechanism.",
    },
    FaqEntry {
        question: "What are the potential use cases of TomCoin?",
        answer: "As a meme coin, TOM's primary use case is as a digital \
                 asset that can be acquired, held, and exchanged. The \
                 project's no-tax policy and transparency about its lack \
                 of utility are part of its appeal. TomCoin is for \
                 entertainment purposes only, with no intrinsic value or \
                 expectation of financial return.",
    },
    FaqEntry {
        question: "What is the history of TomCoin?",
        answer: "TomCoin was launched stealth as a tribute to the Supreme \
                 Leader of the Tom Cult. The project aimed to leverage the \
                 popularity of meme coins and position itself as a notable \
                 meme-based digital asset, attracting a strong community \
                 of like-minded followers.",
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        name: "YouTube",
        url: "https://youtube.com/@tomcoin",
    },
    SocialLink {
        name: "Twitter",
        url: "https://twitter.com/tomcoin",
    },
    SocialLink {
        name: "Telegram",
        url: "https://t.me/tomcoin",
    },
    SocialLink {
        name: "Discord",
        url: "https://discord.gg/tomcoin",
    },
    SocialLink {
        name: "GitLab",
        url: "https://gitlab.com/tomcoin",
    },
];

pub const FOOTER_LINE: &str = "© 2024 by TomCoin. All rights reserved!";

pub const BUY_TITLE: &str = "Buy TomCoin";
pub const BUY_DESCRIPTION: &str = "The most adorable meme coin";
pub const BUY_DISCLAIMER: &str = "TomCoin is a meme coin with no intrinsic \
    value or expectation of financial return. The coin is for entertainment \
    purposes only.";
pub const BUY_SIGNOFF: &str = "Enjoy responsibly!";
