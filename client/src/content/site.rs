//! Concrete content for this portfolio.

use time::macros::date;

use super::{
    About, BlogPost, Experience, Featured, Gallery, GalleryImage, Home, ImageRef, Institution, Intro, Newsletter,
    Orientation, PageMeta, Person, Section, Skill, SocialLink, Tag, VisualItem,
};

/// Canonical origin of the deployed site.
pub const BASE_URL: &str = "https://kassem.dev";

pub const PERSON: Person = Person {
    first_name: "Kassem",
    last_name: "Dev",
    name: "Kassem Dev",
    role: "Full-stack Developer",
    avatar: "/images/avatar-kassem.jpg",
    email: "kassem@example.com",
    location: "Africa/Algiers",
    languages: &["English", "Arabic", "French"],
};

pub const NEWSLETTER: Newsletter = Newsletter {
    display: true,
    title: "Subscribe to Kassem's Newsletter",
    description: "Notes on building products, code, and design systems",
};

pub const SOCIAL: &[SocialLink] = &[
    SocialLink { name: "GitHub", icon: "github", link: "https://github.com/azizaksse", essential: true },
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        link: "https://dz.linkedin.com/in/bellatrech-belkacem",
        essential: true,
    },
    SocialLink {
        name: "Instagram",
        icon: "instagram",
        link: "https://www.instagram.com/webcrafters.agenc/",
        essential: true,
    },
    SocialLink { name: "Threads", icon: "threads", link: "https://www.threads.net/@kassem.dev", essential: true },
    SocialLink { name: "WhatsApp", icon: "whatsapp", link: "https://wa.me/2130676610457", essential: true },
    SocialLink { name: "Email", icon: "email", link: "mailto:kassem@example.com", essential: true },
];

pub const HOME: Home = Home {
    meta: PageMeta {
        path: "/",
        label: "Home",
        title: "Kassem Dev's Portfolio",
        description: "Portfolio and e-commerce builds by a Full-stack Developer",
    },
    image: "/images/og/home.jpg",
    headline: "Building portfolio and commerce experiences that perform",
    featured: Some(Featured { title: "Kassem's Work", href: "/work" }),
    subline: "I'm Kassem, a developer who ships polished portfolios and e-commerce sites with modern web tech. \
              I love shipping fast, reliable products and documenting the journey.",
};

pub const ABOUT: About = About {
    meta: PageMeta {
        path: "/about",
        label: "About",
        title: "About – Kassem Dev",
        description: "Meet Kassem Dev, Full-stack Developer from Africa/Algiers",
    },
    table_of_contents: true,
    show_avatar: true,
    calendar: Some("https://cal.com/kassem"),
    intro: Intro {
        display: true,
        title: "Introduction",
        description: "Kassem is an Algiers-based full-stack developer who builds end-to-end experiences, from \
                      performant frontends to reliable commerce backends. His focus is on clear UX, maintainable \
                      code, and practical tools for real users.",
    },
    work: Section {
        display: true,
        title: "Work Experience",
        entries: &[
            Experience {
                company: "Indie Projects",
                timeframe: "2023 - Present",
                role: "Full-stack Developer",
                achievements: &[
                    "Built and shipped client dashboards with Next.js, improving load times by 30% through caching \
                     and API optimizations.",
                    "Designed reusable UI kits to keep visual consistency across freelance work and personal \
                     products.",
                ],
                images: &[ImageRef {
                    src: "/images/projects/project-01/cover-01.jpg",
                    alt: "Project cover",
                    width: 16,
                    height: 9,
                }],
            },
            Experience {
                company: "North Africa Tech Lab",
                timeframe: "2021 - 2023",
                role: "Front-end Engineer",
                achievements: &[
                    "Developed a component library and documentation site to align engineering and design teams, \
                     reducing UI bugs by 40%.",
                    "Led the migration to TypeScript and modern tooling, cutting onboarding time for new engineers.",
                ],
                images: &[],
            },
        ],
    },
    studies: Section {
        display: true,
        title: "Studies",
        entries: &[
            Institution {
                name: "University of Algiers",
                description: "Studied software engineering and human-computer interaction.",
            },
            Institution {
                name: "Open-source contributions",
                description: "Active in OSS communities around web frameworks and design systems.",
            },
        ],
    },
    technical: Section {
        display: true,
        title: "Technical skills",
        entries: &[
            Skill {
                title: "Frontend systems",
                description: "Ship polished UIs with design tokens and accessible components.",
                tags: &[Tag { name: "Figma", icon: "figma" }],
                images: &[
                    ImageRef {
                        src: "/images/projects/project-01/cover-02.jpg",
                        alt: "Project image",
                        width: 16,
                        height: 9,
                    },
                    ImageRef {
                        src: "/images/projects/project-01/cover-03.jpg",
                        alt: "Project image",
                        width: 16,
                        height: 9,
                    },
                ],
            },
            Skill {
                title: "Full-stack web",
                description: "Building next-gen apps with Next.js, TypeScript, and Supabase.",
                tags: &[
                    Tag { name: "TypeScript", icon: "typescript" },
                    Tag { name: "Next.js", icon: "nextjs" },
                    Tag { name: "Supabase", icon: "supabase" },
                ],
                images: &[ImageRef {
                    src: "/images/projects/project-01/cover-04.jpg",
                    alt: "Project image",
                    width: 16,
                    height: 9,
                }],
            },
        ],
    },
};

pub const BLOG: PageMeta = PageMeta {
    path: "/blog",
    label: "Blog",
    title: "Portfolio & e-commerce build notes",
    description: "Notes from Kassem Dev on portfolio UX, commerce, and shipping fast web apps",
};

pub const WORK: PageMeta = PageMeta {
    path: "/work",
    label: "Work",
    title: "Projects – Kassem Dev",
    description: "Design and dev projects by Kassem Dev",
};

pub const GALLERY: Gallery = Gallery {
    meta: PageMeta {
        path: "/gallery",
        label: "Gallery",
        title: "Photo gallery – Kassem Dev",
        description: "A photo collection by Kassem Dev",
    },
    images: &[
        GalleryImage { src: "/images/gallery/horizontal-1.jpg", alt: "image", orientation: Orientation::Horizontal },
        GalleryImage { src: "/images/gallery/vertical-4.jpg", alt: "image", orientation: Orientation::Vertical },
        GalleryImage { src: "/images/gallery/horizontal-3.jpg", alt: "image", orientation: Orientation::Horizontal },
        GalleryImage { src: "/images/gallery/vertical-1.jpg", alt: "image", orientation: Orientation::Vertical },
        GalleryImage { src: "/images/gallery/vertical-2.jpg", alt: "image", orientation: Orientation::Vertical },
        GalleryImage { src: "/images/gallery/horizontal-2.jpg", alt: "image", orientation: Orientation::Horizontal },
        GalleryImage { src: "/images/gallery/horizontal-4.jpg", alt: "image", orientation: Orientation::Horizontal },
        GalleryImage { src: "/images/gallery/vertical-3.jpg", alt: "image", orientation: Orientation::Vertical },
    ],
};

pub const VISUAL_ITEMS: &[VisualItem] = &[
    VisualItem {
        key: 1,
        preview_image_url: "https://image.thum.io/get/width/800/crop/600/https://eventico-algeria.vercel.app/",
        target_url: "https://eventico-algeria.vercel.app/",
        label: "Eventico Algeria",
    },
    VisualItem {
        key: 2,
        preview_image_url: "https://image.thum.io/get/width/800/crop/600/https://ronaq-5ppm.vercel.app/",
        target_url: "https://ronaq-5ppm.vercel.app/",
        label: "Ronaq",
    },
    VisualItem {
        key: 3,
        preview_image_url: "https://image.thum.io/get/width/800/crop/600/https://sadek4vedio.vercel.app/",
        target_url: "https://sadek4vedio.vercel.app/",
        label: "Sadek Video",
    },
    VisualItem {
        key: 4,
        preview_image_url: "https://image.thum.io/get/width/800/crop/600/https://bidayati-e-learning.vercel.app/",
        target_url: "https://bidayati-e-learning.vercel.app/",
        label: "Bidayati",
    },
    VisualItem {
        key: 5,
        preview_image_url: "https://image.thum.io/get/width/800/crop/600/https://el-omda-voyage.vercel.app/",
        target_url: "https://el-omda-voyage.vercel.app/",
        label: "El Omda Voyage",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "hover-previews-without-jank",
        title: "Hover previews without jank",
        published: date!(2025-03-14),
        summary: "How the project list trails the cursor with a spring instead of snapping to it.",
        tags: &["ui", "animation"],
        body_markdown: include_str!("../../posts/hover-previews-without-jank.md"),
    },
    BlogPost {
        slug: "shipping-commerce-fast",
        title: "Shipping commerce sites fast",
        published: date!(2024-11-02),
        summary: "A checklist for getting a small store from mockup to production in a week.",
        tags: &["commerce", "process"],
        body_markdown: include_str!("../../posts/shipping-commerce-fast.md"),
    },
];
