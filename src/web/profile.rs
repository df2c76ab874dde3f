//! Static profile content rendered on the portfolio page.

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub link: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub struct Language {
    pub language: &'static str,
    pub level: &'static str,
}

/// Everything the page shows about its owner.
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub site_url: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_display: &'static str,
    pub github: &'static str,
    pub nav: &'static [NavItem],
    pub skills: &'static [SkillGroup],
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub certifications: &'static [Certification],
    pub languages: &'static [Language],
}

pub static OWNER: Profile = Profile {
    name: "Ruquiya Nasir",
    headline: "Full-Stack Developer & AI Enthusiast",
    tagline: "Crafting seamless digital experiences with expertise in full-stack development, AI, and innovative solutions.",
    description: "Portfolio of Ruquiya Nasir, a full-stack developer specializing in AI, web development, and innovative digital solutions.",
    site_url: "https://ruquiyanasir.com",
    email: "ruquiyanasir57@gmail.com",
    phone: "+923345302913",
    phone_display: "+92 334 5302913",
    github: "https://github.com/Ruquiya",
    nav: &[
        NavItem { id: "home", label: "Home" },
        NavItem { id: "projects", label: "Projects" },
        NavItem { id: "skills", label: "Skills" },
        NavItem { id: "experience", label: "Experience" },
        NavItem { id: "contact", label: "Contact" },
    ],
    skills: &[
        SkillGroup {
            category: "Frontend Development",
            icon: "fa-code",
            items: &["React", "Next.js", "TypeScript", "JavaScript", "HTML/CSS", "Tailwind CSS"],
        },
        SkillGroup {
            category: "Backend Development",
            icon: "fa-database",
            items: &["Node.js", "Express", "Laravel", "PHP", "Python", "Java"],
        },
        SkillGroup {
            category: "AI & Machine Learning",
            icon: "fa-robot",
            items: &["TensorFlow", "PyTorch", "Chatbot Development", "NLP"],
        },
        SkillGroup {
            category: "Database & DevOps",
            icon: "fa-tools",
            items: &["MySQL", "MongoDB", "PostgreSQL", "Git"],
        },
    ],
    projects: &[
        Project {
            title: "AirGuard",
            description: "A MERN stack-based real-time air quality monitoring system with predictive analytics and interactive dashboards.",
            year: "2025",
            link: "https://github.com/Ruquiya?tab=repositories",
            image: "/static/images/airguard.svg",
            tags: &["React", "Node.js", "Express", "MongoDB", "Tailwind CSS", "ARIMA", "Holt-Winters", "AI Chatbot", "IoT"],
        },
        Project {
            title: "ORAPMS",
            description: "A property management system built with ASP.NET to manage rooms, tenants, and team operations efficiently.",
            year: "2024",
            link: "https://github.com/Ruquiya?tab=repositories",
            image: "/static/images/orapms.svg",
            tags: &["ASP.NET", "Project Management", "Team Collaboration"],
        },
        Project {
            title: "Fresh Cart",
            description: "E-commerce platform for grocery delivery with inventory management and payment integration.",
            year: "2024",
            link: "https://github.com/Ruquiya/FreshCart",
            image: "/static/images/freshcart.svg",
            tags: &["Laravel", "HTML", "CSS", "Bootstrap", "Stripe API"],
        },
        Project {
            title: "Signal Processing Tool",
            description: "Advanced signal analysis application with FFT/DFT visualization and noise reduction algorithms.",
            year: "2023",
            link: "https://github.com/Ruquiya/SignalProcessing",
            image: "/static/images/signal.svg",
            tags: &["Python", "MATLAB", "NumPy", "SciPy"],
        },
        Project {
            title: "Traffic Management System",
            description: "A database-driven traffic management project featuring ER diagrams, relational schemas, and SQL-based data handling.",
            year: "2022",
            link: "https://github.com/Ruquiya/TrafficSquad",
            image: "/static/images/traffic.svg",
            tags: &["SQL", "ER Diagram", "Relational Model", "Database Design"],
        },
        Project {
            title: "Bookstore Management System",
            description: "An object-oriented C++ application for managing bookstore inventory, sales, and customer records with a console-based interface.",
            year: "2022",
            link: "https://github.com/Ruquiya/Bookstore-Management-System",
            image: "/static/images/bookstore.svg",
            tags: &["C++", "OOP", "File Handling", "Console Application"],
        },
    ],
    experience: &[
        Experience {
            title: "Software Engineer Intern",
            company: "SmartTech Solutions",
            period: "Jul 2024 - Sep 2024",
            details: &[
                "Developed AI-powered features for ORAPMS, improving workflow efficiency by 30%.",
                "Implemented responsive UI components using React and TypeScript.",
                "Collaborated with cross-functional teams to deliver features on tight deadlines.",
            ],
        },
        Experience {
            title: "Volunteer Tech Consultant",
            company: "SABA HOMES Orphan Trust",
            period: "Jan 2024 - Feb 2024",
            details: &[
                "Managed and optimized donor databases for improved data accuracy.",
                "Designed and executed digital marketing campaigns to increase outreach.",
                "Developed internal tools to streamline volunteer coordination.",
            ],
        },
    ],
    education: &[
        Education {
            institution: "Capital University",
            degree: "BS Computer Science",
            period: "2021-2025",
            details: "CGPA: 3.90",
        },
        Education {
            institution: "Askaria College",
            degree: "ICS",
            period: "2019-2021",
            details: "A Division",
        },
    ],
    certifications: &[
        Certification { title: "Google UX Design", issuer: "Coursera", year: "2024" },
        Certification { title: "Google Data Analytics", issuer: "Coursera", year: "2023" },
        Certification { title: "Academic Scholarship", issuer: "Capital University", year: "2021-2025" },
        Certification { title: "Certified Associate Member", issuer: "Pakistan Red Crescent", year: "2022" },
    ],
    languages: &[
        Language { language: "English", level: "Advanced" },
        Language { language: "Urdu", level: "Native" },
        Language { language: "French", level: "Basic" },
    ],
};
