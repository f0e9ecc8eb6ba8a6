//! Static page content
//!
//! Everything the home layout and the three windows display. Images are
//! referenced by asset file name; front ends resolve them against the
//! configured asset root.

use crate::window::WindowKind;

/// A link leaving the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    /// Accessible label (also the image alt text)
    pub label: &'static str,
    pub href: &'static str,
    /// Icon asset, if the link is rendered as an icon
    pub icon: Option<&'static str>,
    /// Open in a new browsing context
    pub new_context: bool,
}

impl ExternalLink {
    const fn icon(label: &'static str, href: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            href,
            icon: Some(icon),
            new_context: true,
        }
    }
}

/// Home layout text and links
#[derive(Debug)]
pub struct HomeContent {
    pub header: &'static str,
    pub greeting: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub resume: ExternalLink,
    pub contacts: [ExternalLink; 3],
}

/// Education line in the About-Me window
#[derive(Debug)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub date: &'static str,
}

/// About-Me window
#[derive(Debug)]
pub struct ProfileContent {
    pub photo: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub upcoming_prefix: &'static str,
    pub upcoming: ExternalLink,
    pub intro: &'static str,
    pub skills: &'static [&'static str],
    pub contact_prefix: &'static str,
    pub email: ExternalLink,
    pub education: Education,
    pub interests: &'static [&'static str],
}

/// A career entry or project in the Work window
#[derive(Debug)]
pub struct WorkEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub link: ExternalLink,
}

/// Work window
#[derive(Debug)]
pub struct WorkContent {
    pub career: &'static [WorkEntry],
    pub projects: &'static [WorkEntry],
    pub end_note: &'static str,
}

/// A headed list of skill chips
#[derive(Debug)]
pub struct ChipGroup {
    pub heading: &'static str,
    pub chips: &'static [&'static str],
}

/// Tools window
#[derive(Debug)]
pub struct ToolsContent {
    pub groups: &'static [ChipGroup],
}

/// Body of a floating window
#[derive(Clone, Copy, Debug)]
pub enum WindowContent {
    AboutMe(&'static ProfileContent),
    Work(&'static WorkContent),
    Tools(&'static ToolsContent),
}

impl WindowContent {
    pub fn for_kind(kind: WindowKind) -> Self {
        match kind {
            WindowKind::AboutMe => WindowContent::AboutMe(&PROFILE),
            WindowKind::Work => WindowContent::Work(&WORK),
            WindowKind::Tools => WindowContent::Tools(&TOOLS),
        }
    }
}

/// Close button icon
pub const CLOSE_ICON: &str = "close.png";

/// Text beside the sound checkbox
pub fn sound_label(muted: bool) -> &'static str {
    if muted {
        "Sound Off"
    } else {
        "Sound On"
    }
}

pub static HOME: HomeContent = HomeContent {
    header: "home",
    greeting: "Hi, ",
    highlight: "this is Aaryan.",
    tagline: "I'm a developer.",
    resume: ExternalLink::icon("Resume", "/assets/industry_cv.pdf", "resume.png"),
    contacts: [
        ExternalLink::icon(
            "Linkedin",
            "https://www.linkedin.com/in/aaryan-g-a75457280/",
            "linkedin_circle.png",
        ),
        ExternalLink {
            label: "Gmail",
            href: "mailto:agaur21@asu.edu",
            icon: Some("gmail.png"),
            new_context: false,
        },
        ExternalLink::icon("Github", "https://github.com/AaryanGaur", "github.png"),
    ],
};

pub static PROFILE: ProfileContent = ProfileContent {
    photo: "pfp.PNG",
    name: "Aaryan Gaur",
    role: "Software Developer",
    upcoming_prefix: "Upcoming intern at ",
    upcoming: ExternalLink {
        label: "Amazon",
        href: "https://www.linkedin.com/company/amazon/",
        icon: None,
        new_context: true,
    },
    intro: "Hi! I'm Aaryan, a passionate developer and lifelong student. I...",
    skills: &[
        "create new software projects from scratch",
        "work through bugs patiently",
        "write basic backend APIs like the one on this website",
        "recreate existing technologies to learn how they operate better",
        "read a lot of code...often times more than I write",
        "have a lot of patience and love learning even when it gets frustrating",
    ],
    contact_prefix: "If you're interested in working with me or getting to know me, shoot me an email at ",
    email: ExternalLink {
        label: "agaur21@asu.edu",
        href: "mailto:agaur21@asu.edu",
        icon: None,
        new_context: false,
    },
    education: Education {
        school: "Arizona State University",
        degree: "Bachelor of Science in Computer Science",
        date: "Expected Graduation: May 2026",
    },
    interests: &[
        "learning new languages (human and coding)",
        "music, be it playing or listening",
        "playing board games or video games",
        "watching movies",
    ],
};

pub static WORK: WorkContent = WorkContent {
    career: &[
        WorkEntry {
            title: "Upcoming Software Development Engineer Intern",
            description: "Upcoming software development engineer intern. More details \
                regarding this role will be posted in a few months.",
            link: ExternalLink::icon(
                "Amazon",
                "https://www.linkedin.com/company/amazon/",
                "amazon.png",
            ),
        },
        WorkEntry {
            title: "Reinforcement Learning Research Lab",
            description: "I worked on a research project focused on using reinforcement \
                learning to reduce fuel usage and carbon emissions. My role involved running \
                extensive simulations and designing a reward function to train autonomous \
                driving agents to adopt more energy-efficient behaviors. It was a challenging \
                but rewarding experience, and our final results showed real promise for \
                applying reinforcement learning to sustainability.",
            link: ExternalLink::icon(
                "Github",
                "https://github.com/AaryanGaur/my_project",
                "duckie.jpeg",
            ),
        },
        WorkEntry {
            title: "Current Student Facilitator",
            description: "Serve in a leadership role organizing large-scale events with \
                200–300 participants, including hackathons and community workshops. \
                Responsible for planning activities, coordinating logistics, and training new \
                facilitators to support future events.",
            link: ExternalLink::icon(
                "Principled Innovation Academy",
                "https://pi.education.asu.edu/",
                "pia.png",
            ),
        },
        WorkEntry {
            title: "Former Data Analyst Intern",
            description: "Completed a short internship during freshman year focused on \
                analyzing the local housing market. Built basic regression models and \
                visualized trends using Python libraries like Pandas. Presented key insights \
                to the team through clear, data-driven presentations.",
            link: ExternalLink::icon("NoBroker", "https://www.nobroker.in/", "nobroker.jpeg"),
        },
    ],
    projects: &[
        WorkEntry {
            title: "Java Chess Game Engine",
            description: "Built a fully functional chess game engine in Java, implementing \
                all standard chess rules and mechanics. Only used standard libraries, no \
                external dependencies. The engine supports all chess moves, including \
                castling and en passant.",
            link: ExternalLink::icon(
                "Chess Engine",
                "https://github.com/AaryanGaur/Java-Chess-Engine",
                "ches_board.png",
            ),
        },
        WorkEntry {
            title: "This Portfolio Website!",
            description: "Built this portfolio website. It showcases my projects, skills, \
                and experience in a visually appealing way. The site is fully responsive and \
                works well on both desktop and mobile devices.",
            link: ExternalLink::icon("Portfolio", "https://aaryangaur.com", "website.png"),
        },
    ],
    end_note: "More projects are listed on my Github! I am always looking for new \
        opportunities to learn and grow as a developer. If you have any interesting projects \
        or ideas, feel free to reach out!",
};

pub static TOOLS: ToolsContent = ToolsContent {
    groups: &[
        ChipGroup {
            heading: "TOOLS AND FRAMEWORKS",
            chips: &[
                "Github",
                "VS Code",
                "AWS",
                "Docker",
                "Linux",
                "Tableau",
                "IntelliJ",
                "React",
                "Next.js",
                "Pandas",
                "TensorFlow",
                "PyTorch",
                "Numpy",
                "MongoDB",
                "MySQL",
                "Spring Boot",
            ],
        },
        ChipGroup {
            heading: "PROGRAMMING LANGUAGES",
            chips: &[
                "Java",
                "Python",
                "C/C++",
                "JavaScript",
                "TypeScript",
                "HTML/CSS",
                "R",
                "SQL",
                "Rust",
                "Assembly(x86 and MIPS)",
            ],
        },
    ],
};
