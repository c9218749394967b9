//! Requirements, project setup and architecture steps.

use crate::domain::{CurriculumStep, DecisionCategory, DecisionPoint, PlayerClass, VerificationChallenge, VerificationMode};
use crate::resources::Consequences;

use super::{option, step_decision, verify_id, ChallengeContext};

pub(super) mod plan_1 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "📝 The PM Wants a Meeting",
      DecisionCategory::ScopeManagement,
      "Your PM schedules a requirements meeting. They say: \"We need a todo app, but I have some IDEAS...\"\n\n\
       They want to discuss:\n\
       - Basic todo CRUD\n\
       - User authentication\n\
       - Real-time sync across devices\n\
       - AI-powered task suggestions\n\
       - Calendar integration\n\
       - Team collaboration features\n\n\
       The meeting is in 10 minutes. How do you prepare?"
        .to_string(),
      vec![
        option(
          "accept-all",
          "Agree to everything",
          "\"Sure, we can do all of that!\" (You want to impress them)",
          Consequences::new().sanity(-20).coffee(-15).xp(5).tech_debt(40),
          false,
          "Saying yes to everything without pushback leads to impossible scope. Classic mistake!",
        ),
        option(
          "mvp-focus",
          "Propose MVP approach",
          "\"Let's start with core features and iterate\"",
          Consequences::new().sanity(10).coffee(0).xp(35).tech_debt(-10).code_quality(15),
          true,
          "MVP approach is professional. Ship early, learn fast, iterate.",
        ),
        option(
          "document-first",
          "Ask for written requirements first",
          "\"Can you send me a doc before the meeting?\"",
          Consequences::new().sanity(5).coffee(5).xp(25).tech_debt(0),
          ctx.is(PlayerClass::Architect),
          "Getting requirements in writing prevents scope creep. Smart move.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, _ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "📝 Prioritize These Requirements",
      "Your PM sent this feature list. Categorize them into MVP (Must Have), V2 (Nice to Have), and V3 (Future):",
    )
    .code(
      "Feature Requests for Todo App:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━
1. Add a new todo item
2. Mark todo as complete
3. Delete a todo
4. Real-time sync across devices
5. AI task suggestions
6. User authentication
7. Filter by status (all/active/done)
8. Due date reminders
9. Team sharing & collaboration
10. Dark mode

Your task: Which are MVP (ship first)?
Which can wait for V2? Which are V3?",
    )
    .concepts(&["MVP", "prioritization", "must-have", "nice-to-have", "CRUD"])
    .hints(&[
      ("MVP", "What's the minimum to be useful?"),
      ("CRUD", "Create, Read, Update, Delete - the basics"),
      ("prioritization", "What delivers value fastest?"),
    ])
    .rewards(30, 10)
  }
}

pub(super) mod plan_2 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "📅 Sprint Planning Conflict",
      DecisionCategory::TimeManagement,
      format!(
        "You're planning your {} timeline. Your tech lead asks:\n\n\
         \"How long will the todo app take?\"\n\n\
         Your honest estimate: 2 weeks\n\
         What the business wants: 1 week\n\
         What your AI suggests: \"3-4 days with Cursor\"\n\n\
         The deadline is tied to a product launch. What do you commit to?",
        ctx.stack.display_name()
      ),
      vec![
        option(
          "ai-estimate",
          "Trust the AI estimate (3-4 days)",
          "\"AI will speed things up!\"",
          Consequences::new().sanity(-25).coffee(-30).xp(10).tech_debt(35).ai_trust(-20),
          false,
          "AI estimates ignore testing, debugging, edge cases, and meetings. Dangerous!",
        ),
        option(
          "honest-estimate",
          "Give honest estimate (2 weeks)",
          "\"I need 2 weeks to do this right\"",
          Consequences::new().sanity(10).coffee(5).xp(40).tech_debt(-15).code_quality(20),
          ctx.is(PlayerClass::Architect),
          "Honest estimates build trust. Under-promise, over-deliver.",
        ),
        option(
          "negotiate",
          "Negotiate scope for 1 week",
          "\"1 week for MVP, week 2 for polish\"",
          Consequences::new().sanity(5).coffee(-10).xp(35).tech_debt(5),
          ctx.is(PlayerClass::CoPilot),
          "Negotiating scope is a valuable skill. You found a middle ground.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, _ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "📅 Estimate This Sprint",
      "Break down this sprint and estimate hours for each task:",
    )
    .code(
      "Sprint 1: Todo App MVP
━━━━━━━━━━━━━━━━━━━━━━━
Task                          | Your Estimate
─────────────────────────────────────────────
Project setup & config        | ___ hours
TodoList component            | ___ hours
TodoItem component            | ___ hours
AddTodo form                  | ___ hours
State management              | ___ hours
Basic styling                 | ___ hours
Testing                       | ___ hours
Bug fixes & polish            | ___ hours
─────────────────────────────────────────────
TOTAL                         | ___ hours

Pro tip: Multiply your estimate by 1.5-2x for reality",
    )
    .concepts(&["estimation", "buffer", "sprint", "breakdown", "tasks"])
    .hints(&[
      ("estimation", "How long does each task really take?"),
      ("buffer", "Always add buffer time for unknowns"),
      ("breakdown", "Smaller tasks = better estimates"),
    ])
    .rewards(35, 10)
  }
}

pub(super) mod init_1 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "📁 Folder Structure Debate",
      DecisionCategory::TechnicalChoice,
      format!(
        "Your team is arguing about folder structure for the {}.

Developer A: \"Let's use feature-based folders!\"
├── features/
│   ├── todos/
│   └── auth/

Developer B: \"No, type-based is cleaner!\"
├── components/
├── hooks/
├── services/

Developer C: \"Just use the framework default...\"

You're the tie-breaker. What do you choose?",
        ctx.stack.display_name()
      ),
      vec![
        option(
          "default-structure",
          "Use framework defaults",
          "Go with what create-react-app/flutter gives us",
          Consequences::new().sanity(10).coffee(5).xp(15).tech_debt(15),
          ctx.is(PlayerClass::VibeSurfer),
          "Defaults work for small projects but can get messy as you scale.",
        ),
        option(
          "feature-based",
          "Feature-based structure",
          "Group by feature (todos/, auth/, shared/)",
          Consequences::new().sanity(0).coffee(-10).xp(40).tech_debt(-15).code_quality(25),
          ctx.is(PlayerClass::Architect),
          "Feature-based scales well and keeps related code together. Pro choice!",
        ),
        option(
          "type-based",
          "Type-based structure",
          "Group by type (components/, hooks/, services/)",
          Consequences::new().sanity(5).coffee(-5).xp(30).tech_debt(0).code_quality(10),
          ctx.is(PlayerClass::CoPilot),
          "Type-based is familiar and works well for medium projects.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, _ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::SpotTheBug,
      "📁 Fix This Project Structure",
      "This folder structure has problems. Identify what's wrong:",
    )
    .code(
      "my-todo-app/
├── src/
│   ├── App.tsx
│   ├── TodoList.tsx          # ❌ Component in root
│   ├── TodoItem.tsx          # ❌ Component in root
│   ├── api.ts                # ❌ Utility in root
│   ├── styles.css            # ❌ Styles in root
│   ├── useTodos.ts           # ❌ Hook in root
│   ├── types.ts
│   └── utils/
│       └── helpers.ts
├── package.json
└── README.md

What's the problem with this structure?
How would you reorganize it?",
    )
    .concepts(&["organization", "separation", "folders", "scalability"])
    .bug(
      3,
      "Components should be in a components/ folder",
      "All files in root makes it hard to navigate. Group by type or feature!",
    )
    .rewards(35, 15)
  }
}

pub(super) mod init_2 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    let manifest = ctx.by_framework("pubspec.yaml", "package.json");
    let deps = ctx.by_framework(
      "get_it, injectable, freezed, auto_route, dio",
      "redux, redux-toolkit, axios, lodash, moment, uuid",
    );
    step_decision(
      step,
      "📦 Dependency Dilemma",
      DecisionCategory::TechnicalChoice,
      format!(
        "Setting up {manifest}.\n\n\
         A senior dev reviews your dependencies and comments:\n\n\
         \"Why are you installing {deps}?\n\
         This is a todo app, not a spaceship.\"\n\n\
         But Stack Overflow says these are \"industry standard\"..."
      ),
      vec![
        option(
          "kitchen-sink",
          "Install everything anyway",
          "\"Better to have it and not need it!\"",
          Consequences::new().sanity(-10).coffee(-5).xp(5).tech_debt(30).code_quality(-10),
          false,
          "Unnecessary dependencies = bloat, security risks, and complexity.",
        ),
        option(
          "minimal",
          "Start minimal, add as needed",
          "Only install what you'll use TODAY",
          Consequences::new().sanity(10).coffee(5).xp(40).tech_debt(-15).code_quality(20),
          true,
          "YAGNI - You Aren't Gonna Need It. Start lean, add when necessary.",
        ),
        option(
          "ai-suggest",
          "Ask AI for recommendations",
          "Let ChatGPT decide what you need",
          Consequences::new().sanity(0).coffee(-5).xp(20).tech_debt(10).ai_trust(-10),
          false,
          "AI often suggests popular packages, not necessarily what YOU need.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let manifest = ctx.by_framework("pubspec.yaml", "package.json");
    let code = ctx.by_framework(
      "dependencies:
  flutter:
    sdk: flutter
  firebase_core: ^2.24.0        # Need this? ___
  cloud_firestore: ^4.13.0      # Need this? ___
  provider: ^6.1.1              # Need this? ___
  get_it: ^7.6.0                # Need this? ___
  injectable: ^2.3.0            # Need this? ___
  freezed_annotation: ^2.4.0    # Need this? ___
  json_annotation: ^4.8.0       # Need this? ___
  dio: ^5.3.0                   # Need this? ___

For a basic todo app, which of these do you ACTUALLY need?
Which are overkill?",
      r#"{
  "dependencies": {
    "react": "^18.2.0",           // Need this? ___
    "react-dom": "^18.2.0",       // Need this? ___
    "axios": "^1.6.0",            // Need this? ___
    "lodash": "^4.17.0",          // Need this? ___
    "moment": "^2.29.0",          // Need this? ___
    "redux": "^4.2.0",            // Need this? ___
    "@reduxjs/toolkit": "^1.9.0", // Need this? ___
    "uuid": "^9.0.0",             // Need this? ___
    "date-fns": "^2.30.0"         // Need this? ___
  }
}

For a basic todo app, which do you ACTUALLY need?"#,
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "📦 Audit These Dependencies",
      format!("Review this {manifest}. Which dependencies are unnecessary for a todo app?"),
    )
    .code(code)
    .concepts(&["dependencies", "bloat", "YAGNI", "minimal", "bundle size"])
    .rewards(35, 15)
  }
}

pub(super) mod init_3 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "⚙️ Strict Mode Showdown",
      DecisionCategory::QualityTradeoff,
      format!(
        "Configuring {}. Your options:

STRICT MODE:
- Catches more bugs at compile time
- More red squiggles to fix
- Takes longer to set up

RELAXED MODE:
- Faster to start coding
- Fewer errors to deal with
- Bugs show up at runtime instead

Your deadline is tight. What do you choose?",
        ctx.by_framework("Dart analysis", "TypeScript")
      ),
      vec![
        option(
          "relaxed",
          "Relaxed mode (faster start)",
          "\"I'll fix types later\" (you won't)",
          Consequences::new().sanity(10).coffee(10).xp(10).tech_debt(35).code_quality(-25),
          false,
          "Skipping strict mode means bugs hide until production. Dangerous!",
        ),
        option(
          "strict",
          "Full strict mode",
          "All checks enabled, no shortcuts",
          Consequences::new().sanity(-10).coffee(-15).xp(45).tech_debt(-20).code_quality(35),
          ctx.is(PlayerClass::Architect),
          "Strict mode catches bugs early. The initial pain saves future pain.",
        ),
        option(
          "gradual",
          "Start strict, add exceptions when stuck",
          "Strict by default, relax only when necessary",
          Consequences::new().sanity(0).coffee(-5).xp(35).tech_debt(-5).code_quality(20),
          ctx.is(PlayerClass::CoPilot),
          "Pragmatic approach. Strict where it matters, flexible when needed.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "class Todo {
  String id;
  String title;
  bool completed;

  Todo({required this.id, required this.title, this.completed});
  // ^ BUG: What's wrong with this.completed?
}

void main() {
  var todo = Todo(id: '1', title: 'Test');
  print(todo.completed); // What prints?
}",
      "interface Todo {
  id: string;
  title: string;
  completed: boolean;
}

function createTodo(title: string): Todo {
  return {
    id: Date.now().toString(),
    title: title,
    // BUG: What's missing here?
  };
}

const todo = createTodo(\"Test\");
console.log(todo.completed); // What prints?",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::SpotTheBug,
      "⚙️ Strict Mode Would Catch This",
      "This code has a bug that strict mode would catch. Find it:",
    )
    .code(code)
    .concepts(&["strict mode", "type safety", "null safety", "required fields"])
    .bug(
      ctx.by_framework(6, 10),
      "Missing required property",
      ctx.by_framework(
        "completed has no default value and isn't required. It will be null!",
        "completed is missing from return object. TypeScript strict mode would catch this!",
      ),
    )
    .rewards(40, 15)
  }
}

pub(super) mod init_4 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    let flutter_line = ctx.by_framework("\nFLUTTER: \"Material Design 3 is built in!\"", "");
    step_decision(
      step,
      "🎨 CSS Framework Wars",
      DecisionCategory::TechnicalChoice,
      format!(
        "Time to set up styling. The team has opinions:\n\n\
         TAILWIND FANS: \"Utility classes are the future!\"\n\
         CSS-IN-JS FANS: \"Styled-components are cleaner!\"\n\
         PURISTS: \"Just use plain CSS modules\"{flutter_line}\n\n\
         Twitter is fighting about this RIGHT NOW.\n\
         You need to pick something and move on."
      ),
      vec![
        option(
          "tailwind",
          ctx.by_framework("Custom theme with Material 3", "Tailwind CSS"),
          ctx.by_framework("Use Material 3 with custom theming", "Utility-first CSS framework"),
          Consequences::new().sanity(5).coffee(-5).xp(35).tech_debt(-5).code_quality(15),
          true,
          ctx.by_framework("Material 3 is Flutter's strength. Use it!", "Tailwind is fast and maintainable. Good choice!"),
        ),
        option(
          "css-in-js",
          ctx.by_framework("Inline styles everywhere", "Styled Components"),
          "CSS-in-JS approach",
          Consequences::new().sanity(0).coffee(-10).xp(25).tech_debt(10),
          false,
          "More setup overhead for a small project.",
        ),
        option(
          "plain-css",
          "Plain CSS/SCSS",
          "Keep it simple with regular stylesheets",
          Consequences::new().sanity(5).coffee(5).xp(20).tech_debt(5),
          ctx.is(PlayerClass::VibeSurfer),
          "Simple and works. Nothing wrong with basics.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "Container(
  padding: EdgeInsets.all(16),
  margin: EdgeInsets.symmetric(horizontal: 8, vertical: 4),
  decoration: BoxDecoration(
    color: Colors.white,
    borderRadius: BorderRadius.circular(8),
    boxShadow: [
      BoxShadow(
        color: Colors.black.withOpacity(0.1),
        blurRadius: 4,
        offset: Offset(0, 2),
      ),
    ],
  ),
  child: Text('Todo Item'),
)

Describe what this looks like:",
      "<div className=\"p-4 mx-2 my-1 bg-white rounded-lg shadow-md
  hover:shadow-lg transition-shadow\">
  <span className=\"text-gray-800 font-medium\">Todo Item</span>
</div>

Describe what this looks like:
- Background color?
- Padding/margin?
- Border radius?
- What happens on hover?",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::PredictOutput,
      "🎨 What Does This Style Do?",
      "Predict what this component will look like:",
    )
    .code(code)
    .expect(
      "White card with rounded corners, padding, slight shadow, shadow grows on hover",
      &[
        "Gray card with square corners and no shadow",
        "White full-width banner with a thick border that turns blue on hover",
        "Transparent text-only row with no padding",
      ],
    )
    .concepts(&["padding", "margin", "shadow", "border-radius", "hover"])
    .rewards(30, 10)
  }
}

pub(super) mod init_5 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🔀 Git Workflow Decision",
      DecisionCategory::TechnicalChoice,
      "Setting up Git. How will you structure your commits?

Option A: Commit whenever (YOLO)
\"wip\" \"fix\" \"stuff\" \"asdfasdf\"

Option B: Conventional Commits
\"feat: add todo list component\"
\"fix: resolve checkbox toggle bug\"

Option C: Commit only when feature is done
One big commit per feature

Your future self will read these commits. Choose wisely."
        .to_string(),
      vec![
        option(
          "yolo",
          "Commit whenever, message whatever",
          "\"git commit -m 'stuff'\" ship it!",
          Consequences::new().sanity(10).coffee(5).xp(5).tech_debt(25).code_quality(-15),
          false,
          "Bad commit messages make debugging and reverting a nightmare.",
        ),
        option(
          "conventional",
          "Conventional commits",
          "feat:, fix:, docs:, refactor: prefixes",
          Consequences::new().sanity(-5).coffee(-5).xp(40).tech_debt(-10).code_quality(25),
          ctx.is(PlayerClass::Architect) || ctx.is(PlayerClass::CoPilot),
          "Conventional commits = easy changelogs, better debugging, happier team.",
        ),
        option(
          "big-commits",
          "One commit per feature",
          "Complete the feature, then commit",
          Consequences::new().sanity(0).coffee(0).xp(20).tech_debt(15),
          false,
          "Big commits are hard to review and impossible to partially revert.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, _ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🔀 Fix These Commit Messages",
      "These commit messages are BAD. Rewrite them properly:",
    )
    .code(
      "BAD COMMIT HISTORY:
━━━━━━━━━━━━━━━━━━━━
1. \"stuff\"
2. \"fix\"
3. \"wip\"
4. \"asdfasdf\"
5. \"it works now\"
6. \"final\"
7. \"final final\"
8. \"ok actually final\"

Rewrite each as a good commit message:
1. → _______________
2. → _______________
3. → _______________

What format should commits follow?",
    )
    .concepts(&["conventional commits", "feat", "fix", "descriptive", "atomic"])
    .rewards(30, 10)
  }
}

pub(super) mod arch_1 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🏗️ Architecture Astronaut Alert",
      DecisionCategory::TechnicalChoice,
      format!(
        "You're designing the {} architecture. A senior dev warns:
\"Don't over-engineer it. It's just a todo app.\"

But another dev says: \"We need Clean Architecture!
Repositories, Use Cases, Domain Layer, DTOs...\"

The AI suggests: \"Just put everything in one file to start.\"

Who do you listen to?",
        ctx.stack.display_name()
      ),
      vec![
        option(
          "over-engineer",
          "Full Clean Architecture",
          "12 layers of abstraction for a todo app",
          Consequences::new().sanity(-20).coffee(-25).xp(20).tech_debt(25).code_quality(-10),
          false,
          "Clean Architecture for a todo app is massive overkill. YAGNI!",
        ),
        option(
          "single-file",
          ctx.by_framework("Everything in main.dart", "Everything in App.tsx"),
          "Ship fast, refactor later (you won't)",
          Consequences::new().sanity(15).coffee(10).xp(10).tech_debt(40).code_quality(-25),
          ctx.is(PlayerClass::VibeSurfer),
          "For a quick prototype, sometimes spaghetti ships faster.",
        ),
        option(
          "sensible-layers",
          "Simple separation (UI, State, Types)",
          "Components, hooks, types - just the basics",
          Consequences::new().sanity(5).coffee(-5).xp(45).tech_debt(-10).code_quality(30),
          true,
          "Right-sized architecture. Enough structure without bureaucracy.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, _ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🏗️ Rate This Architecture",
      "Is this architecture appropriate for a todo app? Why or why not?",
    )
    .code(
      "my-todo-app/
├── src/
│   ├── domain/
│   │   ├── entities/
│   │   │   └── Todo.ts
│   │   ├── repositories/
│   │   │   └── ITodoRepository.ts
│   │   └── usecases/
│   │       ├── CreateTodoUseCase.ts
│   │       ├── DeleteTodoUseCase.ts
│   │       ├── UpdateTodoUseCase.ts
│   │       └── GetTodosUseCase.ts
│   ├── data/
│   │   ├── datasources/
│   │   │   └── LocalTodoDataSource.ts
│   │   ├── mappers/
│   │   │   └── TodoMapper.ts
│   │   └── repositories/
│   │       └── TodoRepositoryImpl.ts
│   ├── presentation/
│   │   ├── pages/
│   │   ├── widgets/
│   │   └── bloc/
│   └── core/
│       ├── di/
│       └── utils/

Is this too much? Too little? Just right?",
    )
    .concepts(&["over-engineering", "YAGNI", "layers", "complexity"])
    .rewards(40, 15)
  }
}
