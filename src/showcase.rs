// Static informational sections: hero banner, backend <-> front-end
// architecture map and build roadmap. Rendering produces plain text; the
// UI layer adds color on top.

/// One labelled fact under the hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub pitch: &'static str,
    pub stack: &'static [StackItem],
}

/// How one backend module maps onto front-end commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectureBlock {
    pub title: &'static str,
    pub backend: &'static [&'static str],
    pub frontend: &'static [&'static str],
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStep {
    pub title: &'static str,
    pub detail: &'static str,
    pub status: &'static str,
}

/// Section heading and blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "백엔드 완성 · 프론트 착수",
    headline: "SmartCurator 터미널 프론트엔드",
    pitch: "FastAPI + RAG 백엔드 위에 가벼운 터미널 계층을 얹어 \
            \"링크 수집 → AI 요약 → 의미 검색 → 챗봇\" 흐름을 한 화면에서 체험할 수 있게 만듭니다.",
    stack: &[
        StackItem { label: "Backend", value: "FastAPI · Celery · Qdrant" },
        StackItem { label: "Frontend", value: "Rust CLI · reqwest · dialoguer" },
        StackItem { label: "Deploy", value: "Railway 백엔드 + 단일 바이너리 배포 (예시)" },
    ],
};

pub const QUICK_START_SECTION: Section = Section {
    title: "바로 테스트 가능한 흐름",
    description: "JWT 토큰을 발급받고, 같은 세션에서 컨텐츠를 큐에 넣어 FastAPI + Celery 파이프라인을 타게 합니다.",
};

pub const ARCHITECTURE_SECTION: Section = Section {
    title: "백엔드 모듈 ↔ 프론트 명령 맵",
    description: "기존 FastAPI 서비스 구조를 그대로 활용하면서 각 모듈을 어떤 명령에 연결할지 정리했습니다.",
};

pub const ROADMAP_SECTION: Section = Section {
    title: "다음 단계 로드맵",
    description: "작업 순서와 완료 조건을 명확히 해두면 주말 프로젝트 페이스로도 꾸준히 전진할 수 있습니다.",
};

pub const ARCHITECTURE_MAP: &[ArchitectureBlock] = &[
    ArchitectureBlock {
        title: "인증 · 사용자",
        backend: &["app/api/v1/auth.py", "app/services/auth_service.py"],
        frontend: &["login · register 명령 (JWT)", "보관 예정: 사용자 대시보드"],
        note: "JWT 기반 로그인 후 토큰은 현재 세션 메모리에만 보관",
    },
    ArchitectureBlock {
        title: "컨텐츠 파이프라인",
        backend: &[
            "app/api/v1/content.py",
            "app/services/content_service.py",
            "app/tasks/content_tasks.py",
        ],
        frontend: &["add 명령 (quick-add)", "contents 명령 (/contents/my)"],
        note: "등록 즉시 Celery 작업에 위임, 상태는 /contents/my로 조회",
    },
    ArchitectureBlock {
        title: "검색 & RAG",
        backend: &["app/api/v1/search.py", "app/services/rag_service.py"],
        frontend: &["향후: semantic search 명령"],
        note: "Qdrant + OpenAI 파이프라인을 호출하는 검색 명령 예정",
    },
    ArchitectureBlock {
        title: "챗봇",
        backend: &["app/api/v1/chat.py", "app/services/ai_service.py"],
        frontend: &["대화형 chat 명령 (To-do)"],
        note: "RAG 답변과 사용자 히스토리를 같이 노출",
    },
];

pub const BUILD_STEPS: &[BuildStep] = &[
    BuildStep {
        title: "Auth & 사용자 온보딩",
        detail: "로그인/회원가입 흐름 + 토큰 보관 방식 정립",
        status: "진행 중",
    },
    BuildStep {
        title: "컨텐츠 CRUD 화면",
        detail: "목록/필터/요약 태그 출력, 처리 상태 갱신",
        status: "다음",
    },
    BuildStep {
        title: "Semantic Search · Chat",
        detail: "RAG API 대화형 명령, 스트리밍 응답 연결",
        status: "예정",
    },
    BuildStep {
        title: "배포 & 모니터링",
        detail: "릴리스 빌드 파이프라인, 에러 리포팅 연동",
        status: "예정",
    },
];

fn heading(out: &mut String, section: &Section) {
    out.push_str(&format!("{}\n{}\n\n", section.title, section.description));
}

pub fn render_hero() -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}]\n{}\n{}\n\n", HERO.badge, HERO.headline, HERO.pitch));
    for item in HERO.stack {
        out.push_str(&format!("  {:<9} {}\n", item.label, item.value));
    }
    out
}

pub fn render_architecture() -> String {
    let mut out = String::new();
    heading(&mut out, &ARCHITECTURE_SECTION);
    for block in ARCHITECTURE_MAP {
        out.push_str(&format!("■ {}\n  Backend\n", block.title));
        for file in block.backend {
            out.push_str(&format!("    - {file}\n"));
        }
        out.push_str("  Frontend\n");
        for item in block.frontend {
            out.push_str(&format!("    - {item}\n"));
        }
        out.push_str(&format!("  {}\n\n", block.note));
    }
    out
}

pub fn render_roadmap() -> String {
    let mut out = String::new();
    heading(&mut out, &ROADMAP_SECTION);
    for (index, step) in BUILD_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {} ({})\n   {}\n", index + 1, step.title, step.status, step.detail));
    }
    out
}

/// Every section in page order.
pub fn render_all() -> String {
    let mut out = render_hero();
    out.push('\n');
    heading(&mut out, &QUICK_START_SECTION);
    out.push_str(&render_architecture());
    out.push_str(&render_roadmap());
    out
}
