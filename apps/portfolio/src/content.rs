//! Page copy. Highlight strings use `**bold**` markers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub lang: String,
    pub desc: String,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub period: String,
    pub org: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub detail: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub tags: Vec<String>,
    /// Take the full width of the skills grid.
    #[serde(default)]
    pub wide: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavGlyph {
    Arrow,
    Download,
}

impl NavGlyph {
    pub fn prefix(self) -> &'static str {
        match self {
            NavGlyph::Arrow => "⟶ ",
            NavGlyph::Download => "⬇ ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub glyph: NavGlyph,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub eyebrow: String,
    pub first_name: String,
    pub last_name: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub linkedin_label: String,
    pub linkedin_href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub title: String,
    pub hero: Hero,
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub roles: Vec<Role>,
    pub awards: Vec<Award>,
    pub skills: Vec<SkillGroup>,
    pub contact: Contact,
    pub nav: Vec<NavLink>,
}

fn s(v: &str) -> String {
    v.to_string()
}

fn tags(v: &[&str]) -> Vec<String> {
    v.iter().map(|t| t.to_string()).collect()
}

const LINKEDIN: &str = "https://www.linkedin.com/in/shashwat-singh-6a165a28b/";

impl Default for Content {
    fn default() -> Self {
        Self {
            title: s("Shashwat Singh · Portfolio"),
            hero: Hero {
                eyebrow: s("Portfolio · 2026"),
                first_name: s("Shashwat"),
                last_name: s("Singh."),
                tagline: s("Electrical & Electronic Engineering and Mathematics & Computer Science student @ Adelaide University."),
            },
            about: vec![
                s("First-year Electrical & Electronic Engineering and Mathematics & Computer Science student at the University of Adelaide with a strong interest in avionics, competitive programming, and applied problem-solving. I enjoy working at the intersection of hardware, software, and data, whether through engineering projects, coding competitions, or group technical collaborations."),
                s("Actively focused on algorithmic data structures, competitive programming in state and nation wide programming contests, while simultaneously contributing to avionics engineering projects involving hardware design and embedded software development, currently centred on Adelaide University student manufactured rocket telemetry systems. Always open to opportunities that expand technical depth, practical engineering capability, and collaborative innovation."),
            ],
            projects: vec![
                Project {
                    title: s("Image Convolution Engine"),
                    lang: s("C++20"),
                    desc: s("High-performance image convolution engine implementing Gaussian blur with configurable kernel generation, padding strategies, and float-precision processing in a modular pipeline."),
                    highlights: vec![
                        s("Achieved a **5.37x speedup (81% runtime reduction)** by refactoring direct 2D Gaussian convolution **(O(N·K²))** into a separable 1D implementation **(O(N·K))** benchmarked on 612×460 RGB images with 11×11 kernels."),
                        s("Validated **numerical correctness** against the direct 2D method using **mean squared error (4.6e-15)** and **maximum absolute error (6.5e-7)**, confirming floating-point equivalence."),
                        s("Built a **benchmarking framework** (20+ runs, mean/std computation) that outputs structured **CSV performance reports** for quantitative scalability analysis."),
                    ],
                },
                Project {
                    title: s("Algorithmic Trading Bot Trainer"),
                    lang: s("Qt / C++"),
                    desc: s("A trading simulator that allows users to test different trading strategies in a simulated market environment, built collaboratively in a team of three."),
                    highlights: vec![
                        s("Collaborated and combined code in a team of three in **Object-Oriented** fashion to create **automated trading algorithms**, interactive price and trading history charts, and **real-time performance tracking**."),
                        s("Applied **polymorphism** across core trading, charting, and data-handling classes to standardise behaviour and prevent type-specific failures, improving **system hierarchy and data conversion stability**."),
                    ],
                },
            ],
            roles: vec![
                Role {
                    title: s("Sponsorships Officer"),
                    period: s("Feb 2025 – Present"),
                    org: s("Adelaide Competitive Programming Club (ACPC)"),
                    desc: s("Constructed structured outreach pipelines and maintained corporate correspondence to acquire sponsorships from industry partners. Personally networked with university contacts to grow company connections."),
                },
                Role {
                    title: s("Avionics Team Member"),
                    period: s("Apr 2025 – Present"),
                    org: s("Adept Rocketry Division"),
                    desc: s("Engineered rocket avionics from scratch: integrating IMU and barometric pressure sensors, implementing onboard data logging at 30 Hz, performing sensor fusion testing, and hardware-in-loop validation. Refined 3D flight-data visualisation scripts for multi-axis coordinate plots."),
                },
                Role {
                    title: s("Chassis Lighting System — PCB Designer"),
                    period: s("Jul 2025 – Present"),
                    org: s("Adelaide Rover Team"),
                    desc: s("Designed schematics and industry-standard PCBs in Altium Designer. Implemented reverse-polarity protection and maximum stand-off voltage considerations to minimise electrical failure risk. Worked closely across multiple sub-teams in a coordinated professional environment."),
                },
            ],
            awards: vec![
                Award {
                    name: s("Susquehanna Algothon"),
                    detail: s("Built a Python-based trading algorithm designed to maximise profits in a simulated market environment. Applied Sharpe-optimised reward functions to improve risk-reduction decision-making. Reduced portfolio volatility by ~10–20% compared to baseline strategies in simulation testing."),
                    date: s("Jul 2025"),
                },
                Award {
                    name: s("SQUAD Datathon — 4th Place"),
                    detail: s("18-hour university-wide datathon as part of a three-member team. Implemented a Random Forest classifier (200 trees) achieving 80% accuracy, a 4% improvement over base models and 99% of the industry benchmark. Improved learning efficiency ~15% through feature selection and noise reduction."),
                    date: s("Apr 2025"),
                },
                Award {
                    name: s("ACPC Competitive Programming"),
                    detail: s("Participated in AUCPL, AllUni, and the South Pacific ICPC Preliminary Contest. First-solved a problem in AllUni against 300+ competitors across Australia and New Zealand."),
                    date: s("Feb 2025 – Present"),
                },
            ],
            skills: vec![
                SkillGroup {
                    label: s("Languages"),
                    tags: tags(&["C++", "C", "Python", "MATLAB"]),
                    wide: false,
                },
                SkillGroup {
                    label: s("Technologies"),
                    tags: tags(&["STM Cube IDE", "Arduino IDE", "Altium Designer", "Git", "Qt"]),
                    wide: false,
                },
                SkillGroup {
                    label: s("Hardware"),
                    tags: tags(&["PCB Design", "IMU Integration", "Sensor Fusion", "Embedded Systems"]),
                    wide: true,
                },
            ],
            contact: Contact {
                blurb: s("Currently based in Adelaide, Australia. Open to internships, research roles, and interesting collaborations."),
                email: s("shashwatsingh5021@gmail.com"),
                linkedin_label: s("shashwat-singh"),
                linkedin_href: s(LINKEDIN),
            },
            nav: vec![
                NavLink {
                    label: s("LinkedIn"),
                    href: s(LINKEDIN),
                    glyph: NavGlyph::Arrow,
                },
                NavLink {
                    label: s("GitHub"),
                    href: s("https://github.com/ShashwatSingh67"),
                    glyph: NavGlyph::Arrow,
                },
                NavLink {
                    label: s("Resume"),
                    href: s("Shashwat_Singh_cv.pdf"),
                    glyph: NavGlyph::Download,
                },
            ],
        }
    }
}
