//! Authored step table: requirements, init, architecture, skeleton, brain, quality, production.

use super::{StepCtx, StepDraft};
use crate::domain::StepType;

macro_rules! strs {
  ($($e:expr),* $(,)?) => { vec![$($e.to_string()),*] };
}

pub(super) fn drafts(c: &StepCtx) -> Vec<StepDraft> {
  let mut out = Vec::with_capacity(31);
  planning(c, &mut out);
  init(c, &mut out);
  skeleton(c, &mut out);
  brain(c, &mut out);
  quality(c, &mut out);
  production(c, &mut out);
  out
}

fn planning(c: &StepCtx, out: &mut Vec<StepDraft>) {
  let p = c.profile;
  let ux = c.by_platform("mobile UX", "web UX");

  out.push(StepDraft {
    id: "plan-1",
    title: "Gather Requirements".into(),
    description: format!("Define the requirements and features for your {} todo application.", p.name),
    objective: "Learn how to gather and document requirements. Learn how to use ChatGPT for requirement analysis.".into(),
    step_type: StepType::Configuration,
    order: 0,
    coffee_cost: 0,
    xp_reward: 10,
    depends_on: &[],
    tool: "chatgpt",
    instructions: strs![
      "Step 1: Go to chat.openai.com",
      "Step 2: Start a new conversation",
      format!("Step 3: Ask: \"Help me define requirements for a {} todo app\"", p.name),
      "Step 4: List features: add todos, mark complete, delete, filter, etc.",
      "Step 5: Document user stories and acceptance criteria",
      "Step 6: Review and refine requirements",
    ],
    prompts: strs![
      format!("What are the essential features for a {} todo application?", p.name),
      format!("Help me create user stories for a todo app with {} interface", c.platform),
      format!("What requirements should I consider for a {} todo app?", p.framework),
    ],
    template: format!(
      "Ask ChatGPT: \"Help me define requirements for a {} todo application. I need to identify core features, user stories, acceptance criteria, and technical requirements. Consider {} best practices.\"",
      p.name, ux
    ),
    tips: strs!["Be specific about your platform", "Ask for user stories", "Request acceptance criteria", "Consider edge cases"],
  });

  out.push(StepDraft {
    id: "plan-2",
    title: "Create Project Plan".into(),
    description: format!("Create a development plan and timeline for your {} todo app.", p.name),
    objective: "Learn project planning and task breakdown. Learn how to use Claude for project planning.".into(),
    step_type: StepType::Configuration,
    order: 1,
    coffee_cost: 5,
    xp_reward: 15,
    depends_on: &["plan-1"],
    tool: "claude",
    instructions: strs![
      "Step 1: Go to claude.ai",
      "Step 2: Provide your requirements from the previous step",
      "Step 3: Ask: \"Help me create a development plan for this todo app\"",
      "Step 4: Break down into phases: Setup, Frontend, Backend, Testing, Deployment",
      "Step 5: Estimate time for each phase",
      "Step 6: Create a timeline",
    ],
    prompts: strs![
      format!("Create a development plan for a {} todo app", p.name),
      "Break down the todo app development into phases and tasks",
      format!("Help me estimate development time for a {} todo app", p.framework),
    ],
    template: format!(
      "Ask Claude: \"Based on these requirements [paste requirements], help me create a development plan for my {} todo app. Break it down into phases, identify dependencies, estimate effort, and create a timeline.\"",
      p.name
    ),
    tips: strs!["Provide context from requirements", "Ask for phase breakdown", "Request time estimates", "Get dependency mapping"],
  });
}

fn init(c: &StepCtx, out: &mut Vec<StepDraft>) {
  let p = c.profile;
  let platform = c.platform.as_str();
  let manifest = c.by_platform("pubspec.yaml", "package.json");

  out.push(StepDraft {
    id: "init-1",
    title: "Create Project Structure".into(),
    description: format!("Set up the basic folder structure for your {} {} application.", p.name, platform),
    objective: "Understand project organization and folder structure best practices. Learn how to use ChatGPT for project planning.".into(),
    step_type: StepType::Configuration,
    order: 1,
    coffee_cost: 0,
    xp_reward: 10,
    depends_on: &[],
    tool: "chatgpt",
    instructions: strs![
      "Step 1: Go to chat.openai.com",
      "Step 2: Start a new conversation",
      format!("Step 3: Ask: \"What's the best folder structure for a {} {} app?\"", p.name, platform),
      "Step 4: Review ChatGPT's recommendations",
      "Step 5: Create the folders in your project",
      "Step 6: Ask follow-up questions if needed",
    ],
    prompts: strs![
      format!("What's the best folder structure for a {} {} application?", p.name, platform),
      format!("How should I organize files in a {} {} app?", platform, p.name),
      format!("Show me a recommended project structure for {}", p.framework),
    ],
    template: format!(
      "Ask ChatGPT: \"What's the best folder structure for a {} {} application? Include frontend and backend organization.\"",
      p.name, platform
    ),
    tips: strs!["Ask for best practices", "Request examples", "Consider scalability"],
  });

  out.push(StepDraft {
    id: "init-2",
    title: c.by_platform("Initialize pubspec.yaml", "Initialize Package.json").into(),
    description: c.by_class(
      format!("Let AI create {} for you. [AI-Driven: Accept the complete generated file]", manifest),
      format!("Work with AI to set up {} based on your requirements. [Hybrid: You plan dependencies, AI generates file]", manifest),
      format!("Create {} yourself, use AI only for reference. [Expert: Write it manually, AI helps explain]", manifest),
    ),
    objective: c.by_class(
      format!("Learn dependency management by observing AI. Let Cursor generate {} completely.", manifest),
      format!("Learn dependency management. Plan your dependencies, then use Cursor to generate {}.", manifest),
      format!("Master dependency management. Write {} yourself, use Cursor only for help.", manifest),
    ),
    step_type: StepType::Configuration,
    order: 2,
    coffee_cost: 5,
    xp_reward: 15,
    depends_on: &["init-1"],
    tool: c.by_class("cursor", "cursor-composer", "cursor"),
    instructions: c.by_class(
      strs![
        "Step 1: Open Cursor editor",
        format!("Step 2: Create a new file called {}", manifest),
        "Step 3: Press Cmd+K for inline edit",
        format!("Step 4: Ask: \"Generate a complete {} for {} todo app with all dependencies\"", manifest, p.name),
        "Step 5: Accept the complete generated file - AI did everything",
        "Step 6: Your job: Understand what dependencies were added",
      ],
      strs![
        "Step 1: Plan which dependencies you need first",
        "Step 2: Open Cursor and create the file",
        "Step 3: Press Cmd+I for Cursor Composer",
        format!("Step 4: Describe: \"I need {} with these dependencies: [list yours]\"", manifest),
        "Step 5: Review and refine the generated file",
        "Step 6: Work together with Cursor",
      ],
      strs![
        "Step 1: Research dependencies yourself",
        format!("Step 2: Write {} manually", manifest),
        "Step 3: If unsure about a dependency, press Cmd+K",
        "Step 4: Ask: \"What does this package do?\" or \"Is this the right version?\"",
        "Step 5: Use Cursor only for learning, not generation",
        "Step 6: Understand every dependency you add",
      ],
    ),
    prompts: c.by_class(
      strs![
        format!("Generate a complete {} for {} with all dependencies", manifest, p.name),
        format!("Create full {} file with everything I need", manifest),
      ],
      strs![
        format!("I need {} with these dependencies: [list yours]", manifest),
        format!("Help me create {} for my {} app", manifest, p.name),
      ],
      strs![
        format!("What dependencies do I need for {}?", p.name),
        format!("Help me understand {} structure", manifest),
      ],
    ),
    template: c.by_class(
      format!(
        "Use Cursor (Cmd+K): \"Create a complete {} file for a {} todo application. Include ALL necessary dependencies, devDependencies, and scripts. Generate everything for me.\"",
        manifest, p.name
      ),
      format!(
        "Use Cursor Composer (Cmd+I): \"I need a {} for {}. I want these dependencies: [list yours]. Help me create it with proper structure.\"",
        manifest, p.name
      ),
      format!(
        "Use Cursor only for help: \"I'm writing {} manually. Can you explain what each dependency does?\" [Write it yourself]",
        manifest
      ),
    ),
    tips: c.by_class(
      strs!["Let Cursor generate everything", "Accept the complete file", "Focus on understanding dependencies"],
      strs!["Plan your dependencies first", "Work with Cursor Composer", "Review and refine together"],
      strs!["Write it yourself", "Use Cursor only for learning", "Understand every dependency"],
    ),
  });

  let lang = c.by_platform("Dart", "TypeScript");
  let lang_file = c.by_platform("analysis_options.yaml", "tsconfig.json");
  out.push(StepDraft {
    id: "init-3",
    title: c.by_platform("Configure Dart Analysis", "Set Up TypeScript Configuration").into(),
    description: c.by_platform("Configure Dart for code analysis.", "Configure TypeScript for type safety.").into(),
    objective: format!("Understand {} configuration and its benefits. Learn how to use Gemini for {} setup.", lang, lang),
    step_type: StepType::Configuration,
    order: 3,
    coffee_cost: 5,
    xp_reward: 15,
    depends_on: &["init-2"],
    tool: "gemini",
    instructions: strs![
      "Step 1: Go to gemini.google.com",
      "Step 2: Sign in with your Google account",
      format!("Step 3: Ask: \"What's the best {} configuration for {}?\"", lang, p.framework),
      format!("Step 4: Review Gemini's {} example", lang_file),
      "Step 5: Copy the configuration",
      format!("Step 6: Paste into your {} file", lang_file),
    ],
    prompts: strs![
      format!("What's the best {} configuration for {}?", lang, p.framework),
      format!("Show me a {} for {} with strict mode", lang_file, p.framework),
    ],
    template: format!(
      "Ask Gemini: \"What {} configuration should I use for {}? Provide a complete {} example.\"",
      lang, p.framework, lang_file
    ),
    tips: strs!["Request strict mode configuration", "Ask about module resolution", "Get examples"],
  });

  out.push(StepDraft {
    id: "init-4",
    title: format!("Configure {}", p.styling),
    description: format!("Set up {} for styling.", p.styling),
    objective: "Learn how to configure styling frameworks. Learn how to use Claude for configuration help.".into(),
    step_type: StepType::Configuration,
    order: 4,
    coffee_cost: 5,
    xp_reward: 15,
    depends_on: &["init-2"],
    tool: "claude",
    instructions: strs![
      "Step 1: Go to claude.ai",
      "Step 2: Sign in or create an account",
      format!("Step 3: Ask: \"How do I set up {} with {}?\"", p.styling, p.framework),
      "Step 4: Review Claude's step-by-step instructions",
      "Step 5: Follow the installation steps",
      "Step 6: Ask about configuration files",
      "Step 7: Implement the configuration",
    ],
    prompts: strs![
      format!("How do I set up {} for a {} project?", p.styling, p.framework),
      format!("What's the best way to configure {} with {}?", p.styling, p.framework),
    ],
    template: format!(
      "Ask Claude: \"Help me configure {} for my {} project. Provide setup instructions and configuration examples.\"",
      p.styling, p.framework
    ),
    tips: strs!["Ask for complete setup instructions", "Request configuration file examples", "Get best practices"],
  });

  out.push(StepDraft {
    id: "init-5",
    title: "Initialize Git Repository".into(),
    description: "Set up version control with Git.".into(),
    objective: "Understand the importance of version control. Learn how to use ChatGPT for Git setup.".into(),
    step_type: StepType::Git,
    order: 5,
    coffee_cost: 5,
    xp_reward: 15,
    depends_on: &["init-1"],
    tool: "chatgpt",
    instructions: strs![
      "Step 1: Go to chat.openai.com",
      format!("Step 2: Ask: \"How do I initialize a Git repository for a {} project?\"", p.name),
      "Step 3: Get .gitignore recommendations",
      "Step 4: Follow the Git initialization steps",
      "Step 5: Create .gitignore file with ChatGPT's suggestions",
      "Step 6: Make your first commit",
    ],
    prompts: strs![
      format!("How do I initialize a Git repository for a {} project?", p.name),
      format!("What should be in .gitignore for a {} project?", p.framework),
    ],
    template: format!("Ask ChatGPT: \"How do I set up Git for a {} project? Include .gitignore recommendations.\"", p.name),
    tips: strs!["Ask for .gitignore examples", "Learn basic Git commands", "Understand version control concepts"],
  });

  out.push(StepDraft {
    id: "arch-1",
    title: "Design System Architecture".into(),
    description: format!("Design the overall architecture for your {} todo application.", p.name),
    objective: "Understand system architecture and design patterns. Learn how to use Claude for architecture design.".into(),
    step_type: StepType::Configuration,
    order: 6,
    coffee_cost: 10,
    xp_reward: 25,
    depends_on: &["init-5"],
    tool: "claude",
    instructions: strs![
      "Step 1: Go to claude.ai",
      "Step 2: Describe your project: \"I'm building a todo app with [requirements]\"",
      format!("Step 3: Ask: \"Help me design the system architecture for a {} todo app\"", p.name),
      "Step 4: Review architecture diagrams and component structure",
      "Step 5: Discuss frontend-backend communication",
      "Step 6: Plan data flow and state management",
      "Step 7: Document the architecture",
    ],
    prompts: strs![
      format!("Design the system architecture for a {} todo app", p.name),
      format!("What's the best architecture pattern for a {} application?", p.framework),
      "Help me design the component structure and data flow for my todo app",
    ],
    template: format!(
      "Ask Claude: \"Help me design the system architecture for my {} todo app. I need to understand: component structure, data flow, state management approach, API design, {} architecture patterns, and scalability considerations. Please provide diagrams and explanations.\"",
      p.name, platform
    ),
    tips: strs!["Ask for architecture diagrams", "Request design pattern recommendations", "Discuss scalability", "Plan for future features"],
  });
}

fn skeleton(c: &StepCtx, out: &mut Vec<StepDraft>) {
  let p = c.profile;
  let flutter = c.is_flutter();
  let layout = c.by_platform("mobile", "web");

  out.push(StepDraft {
    id: "skeleton-0",
    title: "Design UI with AI Design Tools".into(),
    description: "Create the UI design for your todo app using AI design tools before coding.".into(),
    objective: "Learn UI/UX design principles and how to use AI design tools (Figma AI, Galileo AI, Uizard) for rapid prototyping.".into(),
    step_type: StepType::CodeGeneration,
    order: 7,
    coffee_cost: 10,
    xp_reward: 25,
    depends_on: &["arch-1"],
    tool: c.by_class("galileo-ai", "figma-ai", "uizard-ai"),
    instructions: c.by_class(
      strs![
        "Step 1: Go to galileo.ai or use the Figma plugin",
        "Step 2: Sign in with your account",
        "Step 3: Describe: \"Create a complete todo app interface with header, input field, and todo list\"",
        "Step 4: Let Galileo AI generate the complete design - no need to plan details yourself",
        "Step 5: Review the AI-generated design",
        "Step 6: If needed, ask AI to iterate: \"Make it more modern\" or \"Add dark mode\"",
        "Step 7: Export or screenshot the design",
        "Step 8: Use this AI-generated design as your complete reference - AI did the design work for you",
      ],
      strs![
        "Step 1: Plan your UI structure first: What components do you need?",
        "Step 2: Open Figma (figma.com) and create a new file",
        "Step 3: Use Figma AI \"Make Design\" to generate base designs",
        "Step 4: You refine: Adjust colors, spacing, typography to match your vision",
        "Step 5: Create a design system - you define the rules, AI helps implement",
        "Step 6: Review and iterate - you make design decisions, AI helps execute",
        "Step 7: Export design specs for development",
        "Step 8: Use as reference - you designed it, AI helped build it",
      ],
      strs![
        "Step 1: Design your UI architecture first - plan components, layout, data flow",
        "Step 2: Go to uizard.io and sign in",
        "Step 3: Use \"Text to Design\" only as a starting point or reference",
        "Step 4: You design the complete UI structure yourself",
        "Step 5: Use Uizard to quickly prototype your design ideas",
        "Step 6: You make all design decisions - colors, spacing, typography",
        "Step 7: Use AI tools only to speed up manual work, not to design for you",
        "Step 8: Export your design - you created it, AI just helped with tools",
      ],
    ),
    prompts: strs![
      "Create a todo app interface with a clean, modern design",
      "Design a mobile-first todo list interface with dark mode",
      "Generate a web dashboard layout for todo management",
    ],
    template: c.by_class(
      format!(
        "Use Galileo AI: \"Create a complete {} todo app UI design with: header/title, input field for adding todos, scrollable list of todo items with checkboxes, completed state styling, {} design system, and responsive layout for {}. Make it modern and beautiful.\" [Let AI design everything for you]",
        p.framework, p.styling, layout
      ),
      format!(
        "Plan your design first, then use Figma AI: \"I want a {} todo app with: header/title, input field, scrollable list, checkboxes, {} design system. Generate a base design, then I'll refine it.\" [You design, AI helps build]",
        p.framework, p.styling
      ),
      "Design your UI architecture yourself. Use Uizard AI only as a reference: \"Show me examples of todo app layouts\" then design your own. [You design everything, AI is just a tool]".to_string(),
    ),
    tips: c.by_class(
      strs![
        "Let AI design everything - be descriptive in your prompt",
        "Ask AI to make it beautiful and modern",
        "Use the AI-generated design as-is",
        "Focus on understanding the design choices AI made",
      ],
      strs![
        "Plan your design structure first",
        "Use AI to generate base designs, then refine them yourself",
        "Make design decisions - colors, spacing, typography",
        "Work collaboratively with AI",
        "Create a design system you understand",
      ],
      strs![
        "Design the complete UI architecture yourself",
        "Use AI tools only for prototyping and reference",
        "Make all design decisions yourself",
        "Understand every design choice",
        "AI is a tool, not a designer",
      ],
    ),
  });

  let app_name = if flutter { "app" } else { "App" };
  let app_file = if flutter { "lib/main.dart" } else { "src/App.tsx" };
  out.push(StepDraft {
    id: "skeleton-1",
    title: format!("Create {} Component", if flutter { "Main" } else { "App" }),
    description: format!("Build the main {} component structure based on your UI design.", app_name),
    objective: format!(
      "Learn {} component structure. {}",
      p.framework,
      c.by_class(
        "Let Cursor generate the complete component for you.",
        "Work with Cursor to implement your component design.",
        "Write the component yourself, use Cursor only for help when needed.",
      )
    ),
    step_type: StepType::CodeGeneration,
    order: 8,
    coffee_cost: 10,
    xp_reward: 20,
    depends_on: &["skeleton-0"],
    tool: "cursor",
    instructions: c.by_class(
      strs![
        format!("Open Cursor and navigate to {}", app_file),
        "Press Cmd+K to open inline edit",
        format!("Ask: \"Create a complete {} App component based on my design\"", p.framework),
        "Let Cursor generate everything - accept the complete code",
        "Your job: Understand what Cursor created",
      ],
      strs![
        "Plan your App component structure first",
        format!("Open Cursor and navigate to {}", app_file),
        "Press Cmd+K for inline edit",
        "Describe your component design: \"I need an App component with...\"",
        "Review Cursor's code and refine it to match your design",
        "Work together: You design, Cursor implements",
      ],
      strs![
        "Design your App component structure yourself",
        format!("Open {}", app_file),
        "Write the component code yourself",
        "If stuck, press Cmd+K and ask: \"Help me with this specific part\"",
        "Use Cursor only for guidance, not generation",
        "Understand every line you write",
      ],
    ),
    prompts: c.by_class(
      strs![
        format!("Create a complete {} App component with title \"My Todo App\"", p.framework),
        "Generate the full App component with all styling",
      ],
      strs![
        "I need an App component with title \"My Todo App\" and basic structure",
        "Help me implement this App component design",
      ],
      strs!["Help me understand App component structure", "What's the best way to structure this component?"],
    ),
    template: c.by_class(
      format!(
        "Create a complete {} {} component that is the root of the application with a title \"My Todo App\" using {} for styling. Generate everything for me.",
        p.framework, app_name, p.styling
      ),
      format!(
        "I want to create a {} App component with title \"My Todo App\" using {}. Help me implement this design.",
        p.framework, p.styling
      ),
      format!(
        "I'm writing a {} App component. Can you help me understand the best structure? [Write it yourself, use this for guidance]",
        p.framework
      ),
    ),
    tips: c.by_class(
      strs!["Let AI generate everything", "Accept the complete code", "Focus on understanding it"],
      strs!["Plan your structure first", "Work with AI to implement", "Review and refine"],
      strs!["Write code yourself", "Use AI only for help", "Understand everything"],
    ),
  });

  let web_list_instructions = c.by_class(
    strs![
      "Step 1: Go to v0.dev or galileo.ai",
      "Step 2: Describe: \"Create a complete TodoList component that displays todos\"",
      "Step 3: Let AI generate the full component code",
      "Step 4: Copy the complete generated code",
      "Step 5: Paste into src/components/TodoList.tsx - AI did the work for you",
    ],
    strs![
      "Step 1: Plan your TodoList component structure first",
      "Step 2: Go to v0.dev",
      "Step 3: Describe your component design",
      "Step 4: Review AI-generated code and refine it",
      "Step 5: Adjust to match your design - you and AI work together",
    ],
    strs![
      "Step 1: Plan your TodoList component structure first",
      "Step 2: Go to v0.dev",
      "Step 3: Describe your component design",
      "Step 4: Review AI-generated code and refine it",
      "Step 5: Adjust to match your design - you and AI work together",
    ],
  );
  let mobile_list_instructions = c.by_class(
    strs![
      "Step 1: Open Cursor editor",
      "Step 2: Create lib/widgets/todo_list.dart",
      "Step 3: Press Cmd+K",
      "Step 4: Ask: \"Create a complete Flutter widget that displays a list of todos\"",
      "Step 5: Accept the full generated code - let AI do it",
    ],
    strs![
      "Step 1: Design your TodoList widget structure",
      "Step 2: Open Cursor and create lib/widgets/todo_list.dart",
      "Step 3: Press Cmd+K and describe your design",
      "Step 4: Review and refine the generated code",
      "Step 5: Work together with Cursor",
    ],
    strs![
      "Step 1: Write the TodoList widget yourself",
      "Step 2: Open lib/widgets/todo_list.dart",
      "Step 3: Code it manually",
      "Step 4: If stuck, press Cmd+K for help on specific parts",
      "Step 5: Use Cursor only for guidance",
    ],
  );
  out.push(StepDraft {
    id: "skeleton-2",
    title: "Build TodoList Component".into(),
    description: format!("Create a component to display a list of todos using {}, matching your UI design.", p.framework),
    objective: format!(
      "Learn component composition and props. {}",
      c.by_class(
        "Let AI generate the complete component for you.",
        "Design the component structure, let AI help implement it.",
        "Write the component yourself, use AI only for help with specific parts.",
      )
    ),
    step_type: StepType::CodeGeneration,
    order: 9,
    coffee_cost: 10,
    xp_reward: 25,
    depends_on: &["skeleton-1"],
    tool: c.by_platform("cursor", c.by_class("galileo-ai", "v0", "v0")),
    instructions: c.by_platform(mobile_list_instructions, web_list_instructions),
    prompts: c.by_class(
      strs!["Create a complete TodoList component that displays todos with checkboxes", "Generate the full component with all features"],
      strs!["I need a TodoList component that displays todos with checkboxes", "Help me implement this component design"],
      strs!["Help me understand TodoList component structure", "What's the best approach for this component?"],
    ),
    template: c.by_class(
      format!(
        "Create a complete {} TodoList component that takes a todos array as props, displays each todo with a checkbox, shows completed todos with strikethrough, uses {} for styling, and is responsive. Generate everything for me.",
        p.framework, p.styling
      ),
      format!(
        "I want to create a {} TodoList component that takes todos array, displays with checkboxes, shows completed state, uses {}. Help me implement this.",
        p.framework, p.styling
      ),
      "I'm writing a TodoList component. Can you help me understand the best structure and patterns? [Write it yourself]".to_string(),
    ),
    tips: c.by_class(
      strs!["Let AI generate the complete component", "Accept the full code", "Focus on understanding it"],
      strs!["Plan your component first", "Work with AI to implement", "Review and refine together"],
      strs!["Write the component yourself", "Use AI only for guidance", "Understand every line"],
    ),
  });

  let state_api = if flutter { "setState" } else { "useState" };
  let host = if flutter { "main app" } else { "App" };
  out.push(StepDraft {
    id: "skeleton-3",
    title: "Add State Management".into(),
    description: format!(
      "Implement state management for todo list using {}.",
      if flutter { "setState or Provider" } else { "useState" }
    ),
    objective: format!(
      "Understand {} state management. {}",
      if flutter { "Flutter" } else { "React" },
      c.by_class(
        "Let ChatGPT generate the complete state management code for you.",
        "Work with ChatGPT to implement state management based on your design.",
        "Learn state management concepts, then write the code yourself. Use ChatGPT only for help when stuck.",
      )
    ),
    step_type: StepType::CodeGeneration,
    order: 10,
    coffee_cost: 15,
    xp_reward: 30,
    depends_on: &["skeleton-2"],
    tool: "chatgpt",
    instructions: c.by_class(
      strs![
        "Step 1: Go to chat.openai.com",
        format!("Step 2: Ask: \"Create complete state management code for my {} todo app using {}\"", p.name, state_api),
        "Step 3: Let ChatGPT generate the full implementation",
        "Step 4: Copy the complete code",
        format!("Step 5: Paste it into your {} component", host),
        "Step 6: Your job: Understand what ChatGPT created",
      ],
      strs![
        "Step 1: Plan your state management approach first",
        "Step 2: Go to chat.openai.com",
        format!("Step 3: Describe your design: \"I need state management for todos using {}\"", state_api),
        "Step 4: Review ChatGPT's suggestions",
        "Step 5: Refine the code to match your architecture",
        "Step 6: Implement together - you design, ChatGPT helps code",
      ],
      strs![
        "Step 1: Study state management concepts first",
        "Step 2: Write the state management code yourself",
        "Step 3: If stuck, go to chat.openai.com",
        format!("Step 4: Ask: \"Help me understand {} for this specific case\"", state_api),
        "Step 5: Use ChatGPT only for learning, not code generation",
        "Step 6: Write the implementation yourself based on what you learned",
      ],
    ),
    prompts: c.by_class(
      strs![
        format!("Create complete state management for my {} todo app", p.name),
        format!("Generate full code for managing todos with {}", state_api),
      ],
      strs![
        format!("I need state management for todos using {}", state_api),
        "Help me implement state management for my todo app",
      ],
      strs![
        format!("Help me understand {} for managing todos", state_api),
        "What's the best approach for state management in this case?",
      ],
    ),
    template: c.by_class(
      format!(
        "\"I'm building a {} todo app. Create complete state management code using {} to manage a todos array. I need: initialize empty array, add todos, toggle completed, delete todos. Generate the full implementation for me.\"",
        p.name, state_api
      ),
      format!(
        "\"I'm building a {} todo app. Help me implement state management using {} for todos. I need: initialize array, add, toggle, delete. Work with me to implement this.\"",
        p.name, state_api
      ),
      format!(
        "\"I'm learning {} for managing todos. Can you explain the concepts and best practices? I'll write the code myself.\"",
        state_api
      ),
    ),
    tips: c.by_class(
      strs!["Let ChatGPT generate everything", "Copy the complete code", "Focus on understanding it"],
      strs!["Plan your approach first", "Work with ChatGPT to implement", "Review and refine together"],
      strs!["Learn the concepts first", "Write code yourself", "Use ChatGPT only for help"],
    ),
  });

  let form_file = if flutter { "lib/widgets/todo_form.dart" } else { "src/components/TodoForm.tsx" };
  out.push(StepDraft {
    id: "skeleton-4",
    title: "Create Add Todo Form".into(),
    description: format!("Build a form component to add new todos using {}, matching your UI design.", p.framework),
    objective: format!(
      "Learn form handling and controlled components. {}",
      c.by_class(
        "Let Cursor generate the complete form component for you.",
        "Design the form structure, use Cursor Composer to help implement it.",
        "Write the form component yourself, use Cursor only for help with specific parts.",
      )
    ),
    step_type: StepType::CodeGeneration,
    order: 11,
    coffee_cost: 15,
    xp_reward: 30,
    depends_on: &["skeleton-3"],
    tool: c.by_class("cursor", "cursor-composer", "cursor"),
    instructions: c.by_class(
      strs![
        "Step 1: Open Cursor editor",
        format!("Step 2: Create {}", form_file),
        "Step 3: Press Cmd+K for inline edit",
        "Step 4: Ask: \"Create a complete TodoForm component with input, submit button, and all functionality\"",
        "Step 5: Let Cursor generate everything - accept the full code",
        "Step 6: Your job: Understand what Cursor created",
      ],
      strs![
        "Step 1: Plan your form component structure first",
        "Step 2: Press Cmd+I to open Cursor Composer",
        "Step 3: Describe your form design: \"I need a TodoForm with...\"",
        "Step 4: Cursor generates the component file",
        "Step 5: Review and refine the generated code to match your design",
        "Step 6: Work together: You design, Cursor implements",
      ],
      strs![
        "Step 1: Design your form component yourself",
        format!("Step 2: Open Cursor and create {}", form_file),
        "Step 3: Write the form code yourself",
        "Step 4: If stuck, press Cmd+K and ask: \"Help me with form validation\" or specific parts",
        "Step 5: Use Cursor only for guidance, not generation",
        "Step 6: Understand every line you write",
      ],
    ),
    prompts: c.by_class(
      strs!["Create a complete TodoForm component with input and submit button", "Generate the full form component with all functionality"],
      strs!["I need a TodoForm component with input field and submit button", "Help me implement this form component design"],
      strs!["Help me understand form component structure", "What's the best approach for form handling?"],
    ),
    template: c.by_class(
      format!(
        "Create a complete {} TodoForm component that has an input field for todo text, a submit button, uses controlled components (value and onChange), calls onSubmit handler when form is submitted, and resets the form after submission. Generate everything for me.",
        p.framework
      ),
      format!(
        "I want to create a {} TodoForm component with input field, submit button, controlled components, onSubmit handler, and form reset. Help me implement this design.",
        p.framework
      ),
      "I'm writing a TodoForm component. Can you help me understand form handling best practices? [Write it yourself]".to_string(),
    ),
    tips: c.by_class(
      strs!["Let Cursor generate everything", "Accept the complete code", "Focus on understanding it"],
      strs!["Plan your form structure first", "Work with Cursor Composer", "Review and refine together"],
      strs!["Write the form yourself", "Use Cursor only for help", "Understand every line"],
    ),
  });

  let unit = c.by_platform("themes", "classes");
  let unit_one = c.by_platform("theme", "class");
  out.push(StepDraft {
    id: "skeleton-5",
    title: format!("Add Styling with {}", p.styling),
    description: format!("Style your components using {} {} to match your AI-generated design.", p.styling, unit),
    objective: format!(
      "Master styling with {}. Learn how to use {} for styling implementation.",
      p.styling,
      c.by_class(
        "Midjourney or DALL-E for color inspiration, then Gemini",
        "Figma AI design tokens, then Gemini",
        "Figma AI design tokens, then Gemini",
      )
    ),
    step_type: StepType::CodeGeneration,
    order: 12,
    coffee_cost: 10,
    xp_reward: 20,
    depends_on: &["skeleton-4"],
    tool: c.by_class("midjourney", "figma-ai", "gemini"),
    instructions: c.by_class(
      strs![
        "Step 1: Use Midjourney or DALL-E for color palette inspiration",
        "Step 2: Generate design concepts: \"Modern todo app, color scheme, UI design\"",
        "Step 3: Extract color palettes from generated images",
        "Step 4: Go to gemini.google.com",
        format!("Step 5: Ask: \"How do I implement these colors in {}?\"", p.styling),
        "Step 6: Get styling code examples",
        format!("Step 7: Apply {} to match your design", p.styling),
      ],
      strs![
        "Step 1: Open your Figma design from skeleton-0",
        "Step 2: Extract design tokens (colors, spacing, typography)",
        "Step 3: Use Figma AI to generate style guide",
        "Step 4: Go to gemini.google.com",
        format!("Step 5: Ask: \"Convert these Figma design tokens to {} classes\"", p.styling),
        "Step 6: Get code examples for your design system",
        format!("Step 7: Apply {} to match Figma design", p.styling),
      ],
      strs![
        "Step 1: Go to gemini.google.com",
        "Step 2: Sign in with your Google account",
        format!("Step 3: Ask: \"How do I style a {} component with {}?\"", p.framework, p.styling),
        "Step 4: Request specific styling examples",
        "Step 5: Ask about responsive design",
        "Step 6: Get code examples for your components",
        format!("Step 7: Apply {} to your components", p.styling),
      ],
    ),
    prompts: strs![
      c.by_class(
        "Generate color palette inspiration for a modern todo app".to_string(),
        format!("Convert Figma design tokens to {} classes", p.styling),
        format!("How do I center content and add padding with {}?", p.styling),
      ),
      format!("Show me {} {} for a responsive card component", p.styling, unit),
    ],
    template: c.by_class(
      format!(
        "First, use Midjourney: \"Modern todo app UI design, color palette, {} style\" to get color inspiration. Then ask Gemini: \"I have a {} component and want to style it with {} using these colors [paste colors]. I need centered layout, responsive design, and modern styling. Please provide {} examples.\"",
        p.styling, p.framework, p.styling, unit_one
      ),
      format!(
        "Use Figma AI to extract design tokens from your design, then ask Gemini: \"Convert these Figma design tokens [paste tokens] to {} classes for my {} components. Include responsive design and component styling.\"",
        p.styling, p.framework
      ),
      format!(
        "Ask Gemini: \"I have a {} component and want to style it with {}. I need centered layout, responsive design, modern styling, and hover effects. Please provide {} examples.\"",
        p.framework, p.styling, unit_one
      ),
    ),
    tips: strs![
      c.by_class("Use AI for design inspiration first", "Extract design tokens from Figma", ""),
      format!("Ask for specific {} {}", p.styling, c.by_platform("theme configurations", "class combinations")),
      "Request responsive design examples",
      "Get examples for common UI patterns",
      "Match your AI-generated design",
    ],
  });

  out.push(StepDraft {
    id: "skeleton-6",
    title: "Write Component Tests".into(),
    description: format!("Create unit tests for your {} components.", p.framework),
    objective: format!(
      "Learn testing best practices and TDD. Learn how to use {} for test generation.",
      if c.is_architect() { "Claude" } else { "GitHub Copilot" }
    ),
    step_type: StepType::Testing,
    order: 13,
    coffee_cost: 20,
    xp_reward: 40,
    depends_on: &["skeleton-5"],
    tool: if c.is_architect() { "claude" } else { "github-copilot" },
    instructions: if c.is_architect() {
      strs![
        "Step 1: Go to claude.ai",
        format!("Step 2: Ask: \"How do I write tests for {} components?\"", p.framework),
        "Step 3: Review testing strategy",
        "Step 4: Ask for code examples",
        "Step 5: Implement tests",
      ]
    } else {
      strs![
        "Step 1: Install GitHub Copilot extension",
        "Step 2: Open your component file",
        "Step 3: Create a test file",
        "Step 4: Write a comment: \"// Test for Component that renders correctly\"",
        "Step 5: Let Copilot generate the test code",
        "Step 6: Review and accept",
      ]
    },
    prompts: strs![
      "// Test for TodoList component that renders todos",
      "// Test for TodoItem component with checkbox interaction",
    ],
    template: "Write comments describing what you want to test: \"// Test for [ComponentName] that renders without errors, displays correct content, handles user interactions, and shows loading states.\"".into(),
    tips: strs!["Write descriptive comments", "Let AI generate the test structure", "Review generated tests"],
  });
}

fn brain(c: &StepCtx, out: &mut Vec<StepDraft>) {
  let p = c.profile;
  let mobile = c.is_mobile();
  let auth_tech = c.by_platform("Firebase Auth", "JWT tokens");

  out.push(StepDraft {
    id: "brain-0",
    title: "Design Authentication System".into(),
    description: "Plan your authentication system for user registration and login.".into(),
    objective: format!(
      "Understand authentication concepts and security. {}",
      c.by_class(
        "Let Claude design the complete auth system for you.",
        "Work with Claude to design your auth architecture.",
        "Design the auth system yourself, use Claude for guidance on security best practices.",
      )
    ),
    step_type: StepType::Configuration,
    order: 14,
    coffee_cost: 15,
    xp_reward: 30,
    depends_on: &["skeleton-6"],
    tool: "claude",
    instructions: c.by_class(
      strs![
        "Step 1: Go to claude.ai",
        "Step 2: Ask: \"Design a complete authentication system for my todo app\"",
        "Step 3: Let Claude generate the full auth architecture",
        "Step 4: Review the auth flow and security recommendations",
        "Step 5: Use Claude's design as your blueprint",
      ],
      strs![
        "Step 1: Plan your auth requirements first (registration, login, password reset)",
        "Step 2: Go to claude.ai",
        "Step 3: Describe your auth needs: \"I need authentication with...\"",
        "Step 4: Review Claude's suggestions and refine them",
        "Step 5: Work together to finalize the auth design",
      ],
      strs![
        "Step 1: Design your authentication architecture yourself",
        "Step 2: Research auth patterns (JWT, sessions, OAuth)",
        "Step 3: Go to claude.ai only for security guidance",
        "Step 4: Ask: \"What security best practices should I follow for authentication?\"",
        "Step 5: Implement your design based on what you learned",
      ],
    ),
    prompts: c.by_class(
      strs!["Design a complete authentication system for my todo app", "Generate full auth architecture with security"],
      strs!["I need authentication with registration and login", "Help me design an auth system for my todo app"],
      strs!["What are authentication security best practices?", "Help me understand JWT vs session-based auth"],
    ),
    template: c.by_class(
      format!(
        "Ask Claude: \"Design a complete authentication system for my {} todo app. I need: user registration, login, password hashing, {}, protected routes, and security best practices. Generate the full architecture for me.\"",
        p.name, auth_tech
      ),
      format!(
        "Ask Claude: \"I need to design authentication for my {} todo app. I want: registration, login, {}, protected routes. Help me design this architecture.\"",
        p.name, auth_tech
      ),
      format!(
        "Ask Claude: \"What are the security best practices for implementing authentication in a {} app? I'm designing it myself and need guidance on: password hashing, {}, and secure session handling.\"",
        p.name,
        c.by_platform("Firebase Auth security", "JWT token management")
      ),
    ),
    tips: c.by_class(
      strs!["Let Claude design everything", "Use the complete auth architecture", "Focus on understanding it"],
      strs!["Plan your requirements first", "Work with Claude to design", "Review and refine together"],
      strs!["Design it yourself", "Use Claude only for security guidance", "Understand every security decision"],
    ),
  });

  let store = c.by_platform("Firebase", "database");
  out.push(StepDraft {
    id: "brain-1",
    title: c.by_platform("Design Firebase Database Schema", "Design Database Schema").into(),
    description: format!("Plan your {} structure for todos and users.", store),
    objective: format!("Understand {} design and relationships. Learn how to use Claude for architecture design.", store),
    step_type: StepType::Configuration,
    order: 15,
    coffee_cost: 15,
    xp_reward: 30,
    depends_on: &["brain-0"],
    tool: "claude",
    instructions: strs![
      "Step 1: Go to claude.ai",
      "Step 2: Sign in or create an account",
      format!(
        "Step 3: Describe your project: \"I'm building a todo app with {} frontend and {} backend\"",
        p.framework,
        c.backend()
      ),
      format!("Step 4: Ask: \"Help me design a {} schema for a todo application\"", store),
      format!(
        "Step 5: Review Claude's suggestions for {}",
        c.by_platform("collections and documents", "tables, fields, and relationships")
      ),
      "Step 6: Ask about best practices and trade-offs",
      format!("Step 7: Request {} schema examples", c.by_platform("Firestore", "SQL or Prisma")),
      "Step 8: Implement the schema in your project",
    ],
    prompts: strs![
      format!(
        "Help me design a {} schema for a todo app. What {} do I need?",
        c.by_platform("Firebase Firestore", "database"),
        c.by_platform("collections", "tables")
      ),
      format!(
        "What's the best way to structure a {} for todos with user authentication?",
        c.by_platform("Firestore", "database")
      ),
    ],
    template: format!(
      "Provide context: \"I'm building a todo application with user authentication, todos with title/description/completed status, categories or tags, and due dates. Help me design the {} schema. Consider what {} I need, what relationships exist, and what indexes I should create.\"",
      c.by_platform("Firestore", "database"),
      c.by_platform("collections/documents", "tables/fields")
    ),
    tips: strs![
      "Ask for multiple approaches and trade-offs",
      c.by_platform("Request Firestore structure examples", "Request both SQL and NoSQL options"),
      "Ask about normalization",
      "Consider scalability in your questions",
    ],
  });

  out.push(StepDraft {
    id: "brain-1.5",
    title: c.by_platform("Implement Firebase Authentication", "Create Authentication API").into(),
    description: c
      .by_platform(
        "Set up Firebase Authentication for user registration and login.",
        "Build authentication API endpoints for registration and login.",
      )
      .into(),
    objective: format!(
      "Learn authentication implementation. {}",
      c.by_class(
        "Let Cursor generate the complete auth API for you.",
        "Design the auth endpoints, let Cursor help implement them.",
        "Write the auth API yourself, use Cursor only for help with specific parts.",
      )
    ),
    step_type: StepType::CodeGeneration,
    order: 16,
    coffee_cost: 20,
    xp_reward: 40,
    depends_on: &["brain-1"],
    tool: "cursor",
    instructions: c.by_class(
      strs![
        c.by_platform("Step 1: Open Firebase Console and enable Authentication", "Step 1: Open your API routes file"),
        "Step 2: Press Cmd+K in Cursor",
        c.by_platform(
          "Step 3: Ask: \"Set up complete Firebase Authentication for registration and login\"",
          "Step 3: Ask: \"Create complete authentication API with register and login endpoints\"",
        ),
        "Step 4: Let Cursor generate everything",
        "Step 5: Accept the full implementation",
      ],
      strs![
        "Step 1: Plan your auth endpoints first (POST /register, POST /login)",
        c.by_platform("Step 2: Open Firebase Console", "Step 2: Open your API routes file"),
        "Step 3: Press Cmd+K and describe your auth design",
        "Step 4: Review and refine Cursor's generated code",
        "Step 5: Work together to implement",
      ],
      strs![
        "Step 1: Write the auth API yourself",
        c.by_platform("Step 2: Set up Firebase Auth manually", "Step 2: Create auth endpoints manually"),
        "Step 3: If stuck, press Cmd+K for help on specific parts",
        "Step 4: Use Cursor only for guidance",
        "Step 5: Understand every line of auth code",
      ],
    ),
    prompts: strs![c.by_class(
      c.by_platform("Set up complete Firebase Authentication", "Create complete authentication API with register and login"),
      c.by_platform("Help me implement Firebase Authentication", "Help me create authentication API endpoints"),
      c.by_platform("Help me understand Firebase Auth setup", "Help me understand JWT token implementation"),
    )],
    template: match (c.class, mobile) {
      (crate::domain::PlayerClass::VibeSurfer, true) => "Use Cursor: \"Set up complete Firebase Authentication for my Flutter app. I need: user registration, email/password login, password reset, and secure authentication flow. Generate everything for me.\"".to_string(),
      (crate::domain::PlayerClass::VibeSurfer, false) => format!(
        "Use Cursor: \"Create complete authentication API for my {} app. I need: POST /api/auth/register, POST /api/auth/login, password hashing with bcrypt, JWT token generation, and error handling. Generate the full implementation.\"",
        p.name
      ),
      (crate::domain::PlayerClass::CoPilot, true) => "Use Cursor: \"I need Firebase Authentication for registration and login. Help me implement this.\"".to_string(),
      (crate::domain::PlayerClass::CoPilot, false) => "Use Cursor: \"I need authentication API endpoints: POST /api/auth/register and POST /api/auth/login with JWT tokens. Help me implement this.\"".to_string(),
      (crate::domain::PlayerClass::Architect, true) => "Use Cursor only for help: \"I'm setting up Firebase Auth. Can you help me understand the best practices?\" [Implement it yourself]".to_string(),
      (crate::domain::PlayerClass::Architect, false) => "Use Cursor only for help: \"I'm writing auth API. Can you help me understand JWT token best practices?\" [Write it yourself]".to_string(),
    },
    tips: c.by_class(
      strs!["Let Cursor generate everything", "Accept the complete auth code", "Focus on understanding it"],
      strs!["Plan your endpoints first", "Work with Cursor to implement", "Review and refine together"],
      strs!["Write the auth API yourself", "Use Cursor only for guidance", "Understand every security detail"],
    ),
  });

  out.push(StepDraft {
    id: "brain-2",
    title: c.by_platform("Create Firebase Functions", "Create API Endpoints").into(),
    description: c
      .by_platform("Build Firebase Cloud Functions for CRUD operations.", "Build REST API endpoints for CRUD operations.")
      .into(),
    objective: format!(
      "Learn {} design. Learn how to use Cursor to generate {}.",
      c.by_platform("Firebase Functions", "REST API"),
      c.by_platform("functions", "API routes")
    ),
    step_type: StepType::CodeGeneration,
    order: 17,
    coffee_cost: 20,
    xp_reward: 40,
    depends_on: &["brain-1.5"],
    tool: "cursor",
    instructions: strs![
      format!("Open the {} file", c.by_platform("functions", "API route")),
      "Press Cmd+K for inline edit",
      format!("Describe the {} you want", c.by_platform("Cloud Function", "API endpoint")),
      format!("Generate {}", c.by_platform("functions for getTodos, createTodo, updateTodo, deleteTodo", "GET, POST, PUT, DELETE endpoints")),
      "Review and accept the code",
    ],
    prompts: strs![
      c.by_platform(
        "Create a Firebase function that returns all todos from Firestore",
        "Create a GET endpoint that returns all todos from the database",
      ),
      c.by_platform(
        "Build a Firebase function that creates a new todo and saves it to Firestore",
        "Build a POST endpoint that creates a new todo and saves it to the database",
      ),
    ],
    template: format!(
      "Create {} for todos: {}. Use {} and include error handling.",
      c.by_platform("Firebase Cloud Functions", "REST API endpoints"),
      c.by_platform(
        "getTodos, createTodo, updateTodo, deleteTodo",
        "GET /api/todos, POST /api/todos, PUT /api/todos/:id, DELETE /api/todos/:id",
      ),
      c.by_platform("Firebase Admin SDK", "Express.js")
    ),
    tips: strs![
      "Be specific about HTTP methods or function types",
      "Include error handling in your prompt",
      "Mention the database you're using",
    ],
  });

  let integration_target = c.by_platform("Firebase Firestore", "a REST API endpoint");
  out.push(StepDraft {
    id: "brain-3",
    title: c.by_platform("Connect Flutter to Firebase", "Connect Frontend to API").into(),
    description: c.by_platform(
      "Use Firebase SDK to connect your Flutter app to Firestore.".to_string(),
      format!("Use fetch to connect your {} app to the backend.", p.framework),
    ),
    objective: format!(
      "Understand {} operations and {} integration. Learn how to use {} for integration help.",
      c.by_platform("Firebase", "async"),
      c.by_platform("Firestore", "API"),
      if c.is_co_pilot() { "Cursor Chat" } else { "ChatGPT" }
    ),
    step_type: StepType::CodeGeneration,
    order: 19,
    coffee_cost: 20,
    xp_reward: 40,
    depends_on: &["brain-2"],
    tool: if c.is_co_pilot() { "cursor-chat" } else { "chatgpt" },
    instructions: if c.is_co_pilot() {
      strs![
        "Step 1: Open Cursor editor",
        "Step 2: Press Cmd+L to open chat",
        format!("Step 3: Ask: \"How do I connect my {} component to {}?\"", p.framework, integration_target),
        "Step 4: Review Cursor's code examples",
        "Step 5: Implement the integration",
      ]
    } else {
      strs![
        "Step 1: Go to chat.openai.com",
        format!(
          "Step 2: Ask: \"How do I {} in a {} component?\"",
          c.by_platform("connect Flutter to Firebase Firestore", "fetch data from my API endpoint"),
          p.framework
        ),
        "Step 3: Review code examples",
        "Step 4: Implement in your component",
      ]
    },
    prompts: strs![
      c.by_platform(
        "How do I read and write data to Firestore in Flutter?".to_string(),
        format!("How do I fetch data from my API endpoint in a {} component?", p.framework),
      ),
      format!(
        "What's the best way to handle {} calls with async/await in {}?",
        c.by_platform("Firestore", "API"),
        p.framework
      ),
    ],
    template: format!(
      "Ask: \"How do I connect my {} component to {}? I need to {}, handle loading states, display error messages, and use async/await.\"",
      p.framework,
      c.by_platform("Firebase Firestore", "my REST API"),
      c.by_platform("read and write todos", "fetch todos from GET /api/todos")
    ),
    tips: strs!["Ask specific questions about your setup", "Request code examples", "Ask about error handling"],
  });

  let calls = c.by_platform("Firebase", "API");
  out.push(StepDraft {
    id: "brain-4",
    title: "Add Error Handling".into(),
    description: format!("Implement proper error handling for {} calls and authentication.", calls),
    objective: format!(
      "Learn error handling patterns and user feedback. Learn how to use {} for error handling patterns.",
      if c.is_architect() { "Claude" } else { "ChatGPT" }
    ),
    step_type: StepType::CodeGeneration,
    order: 20,
    coffee_cost: 15,
    xp_reward: 30,
    depends_on: &["brain-3"],
    tool: if c.is_architect() { "claude" } else { "chatgpt" },
    instructions: strs![
      if c.is_architect() { "Step 1: Go to claude.ai" } else { "Step 1: Go to chat.openai.com" },
      format!("Step 2: Ask: \"What's the best way to handle errors in {} {} calls?\"", p.framework, calls),
      "Step 3: Review error handling patterns",
      "Step 4: Ask for code examples with try/catch",
      "Step 5: Learn about error boundaries or error widgets",
      "Step 6: Implement error handling in your code",
    ],
    prompts: strs![
      format!(
        "What's the best way to handle errors in {} {} calls?",
        p.framework,
        c.by_platform("Firebase", "fetch API")
      ),
      format!("Show me how to display error messages to users in {}", p.framework),
    ],
    template: format!(
      "Ask: \"What's the best way to handle errors in {} {} calls? I need try/catch blocks for async functions, user-friendly error messages, error state management, and {} for component errors. Please provide code examples.\"",
      p.framework,
      calls,
      c.by_platform("error widgets", "error boundaries")
    ),
    tips: strs!["Ask for complete error handling patterns", "Request code examples", "Learn about error boundaries/widgets"],
  });

  out.push(StepDraft {
    id: "brain-5",
    title: "Write Integration Tests".into(),
    description: format!(
      "Test the full flow from frontend to {}, including authentication.",
      c.by_platform("Firebase", "backend")
    ),
    objective: "Understand integration testing and E2E concepts. Learn how to use Claude for test strategy.".into(),
    step_type: StepType::Testing,
    order: 21,
    coffee_cost: 25,
    xp_reward: 50,
    depends_on: &["brain-4"],
    tool: "claude",
    instructions: strs![
      "Step 1: Go to claude.ai",
      format!(
        "Step 2: Ask: \"How do I write integration tests for a {} app with {}?\"",
        p.framework,
        c.by_platform("Firebase", "API calls")
      ),
      "Step 3: Review Claude's testing strategy",
      "Step 4: Ask for code examples with testing libraries",
      format!("Step 5: Learn about {}", c.by_platform("Firebase emulators", "mocking API calls")),
      "Step 6: Implement integration tests",
    ],
    prompts: strs![
      format!(
        "How do I write integration tests for {} components that {}?",
        p.framework,
        c.by_platform("use Firebase", "call APIs")
      ),
      format!(
        "What's the best way to {} in {} tests?",
        c.by_platform("test Firebase integration", "mock API calls"),
        p.framework
      ),
    ],
    template: format!(
      "Ask Claude: \"How do I write integration tests for my {} todo app? I need to test user interactions (adding todos), {} (fetching, creating todos), state updates, and error handling. Please provide testing strategy and code examples.\"",
      p.framework,
      c.by_platform("Firebase operations", "API calls")
    ),
    tips: strs![
      "Ask for complete testing strategy",
      "Request mocking examples",
      format!("Learn about testing libraries for {}", p.framework),
    ],
  });
}

fn quality(c: &StepCtx, out: &mut Vec<StepDraft>) {
  let p = c.profile;
  let reviewer = if c.is_co_pilot() { "Cursor Chat" } else { "Claude" };

  out.push(StepDraft {
    id: "quality-1",
    title: "Code Review & Refactoring".into(),
    description: "Review and refactor your code for quality and maintainability.".into(),
    objective: format!(
      "Learn code review practices and refactoring techniques. Learn how to use {} for code review.",
      reviewer
    ),
    step_type: StepType::CodeGeneration,
    order: 22,
    coffee_cost: 15,
    xp_reward: 30,
    depends_on: &["brain-5"],
    tool: if c.is_co_pilot() { "cursor-chat" } else { "claude" },
    instructions: if c.is_co_pilot() {
      strs![
        "Step 1: Open Cursor editor",
        "Step 2: Press Cmd+L to open chat",
        "Step 3: Select your code files",
        "Step 4: Ask: \"Review this code and suggest improvements\"",
        "Step 5: Review suggestions and refactor",
      ]
    } else {
      strs![
        "Step 1: Go to claude.ai",
        "Step 2: Paste your code",
        "Step 3: Ask: \"Review this code and suggest refactoring improvements\"",
        "Step 4: Review suggestions",
        "Step 5: Refactor based on recommendations",
      ]
    },
    prompts: strs![
      "Review this code and suggest improvements for maintainability",
      "Help me refactor this component to follow best practices",
      "What code smells do you see in this code?",
    ],
    template: format!(
      "Ask {}: \"Review my {} todo app code. Check for: code quality, best practices, maintainability, performance issues, and suggest refactoring improvements. Focus on {} patterns and conventions.\"",
      reviewer, p.framework, p.framework
    ),
    tips: strs!["Ask for specific improvements", "Request best practice recommendations", "Get refactoring suggestions"],
  });

  let surface = c.by_platform("mobile", "web");
  out.push(StepDraft {
    id: "quality-2",
    title: "Security Audit".into(),
    description: format!("Perform a security audit of your {} application.", p.name),
    objective: format!(
      "Understand security best practices and common vulnerabilities. Learn how to use {} for security analysis.",
      if c.is_architect() { "Perplexity" } else { "Claude" }
    ),
    step_type: StepType::Configuration,
    order: 20,
    coffee_cost: 20,
    xp_reward: 40,
    depends_on: &["quality-1"],
    tool: if c.is_architect() { "perplexity" } else { "claude" },
    instructions: strs![
      if c.is_architect() { "Step 1: Go to perplexity.ai" } else { "Step 1: Go to claude.ai" },
      format!("Step 2: Ask: \"What security vulnerabilities should I check for in a {} app?\"", p.name),
      "Step 3: Review common security issues",
      "Step 4: Check for: XSS, CSRF, SQL injection, authentication issues",
      "Step 5: Review environment variable handling",
      "Step 6: Fix identified security issues",
    ],
    prompts: strs![
      format!("What security vulnerabilities should I check for in a {} app?", p.framework),
      format!("How do I secure API endpoints in a {} application?", p.name),
      format!("What are common security issues in {} apps?", surface),
    ],
    template: format!(
      "Ask: \"Perform a security audit for my {} todo app. Check for: authentication security, data validation, {}, API security, environment variable security, and {}. Provide a checklist and recommendations.\"",
      p.name,
      c.by_platform("mobile app security", "XSS/CSRF protection"),
      c.by_platform("secure storage", "secure data transmission")
    ),
    tips: strs!["Request security checklist", "Ask about OWASP top 10", "Get specific recommendations", "Learn about secure coding practices"],
  });

  out.push(StepDraft {
    id: "quality-3",
    title: "Performance Testing".into(),
    description: format!("Test and optimize the performance of your {} application.", p.framework),
    objective: format!(
      "Understand performance testing and optimization. Learn how to use {} for performance analysis.",
      if c.is_architect() { "Phind" } else { "Claude" }
    ),
    step_type: StepType::Testing,
    order: 21,
    coffee_cost: 20,
    xp_reward: 40,
    depends_on: &["quality-2"],
    tool: if c.is_architect() { "phind" } else { "claude" },
    instructions: strs![
      if c.is_architect() { "Step 1: Go to phind.com" } else { "Step 1: Go to claude.ai" },
      format!("Step 2: Ask: \"How do I test and optimize performance for a {} app?\"", p.framework),
      "Step 3: Learn about performance metrics",
      "Step 4: Use browser DevTools or profiling tools",
      "Step 5: Identify bottlenecks",
      "Step 6: Optimize slow components and API calls",
    ],
    prompts: strs![
      format!("How do I test performance for a {} application?", p.framework),
      format!("What performance metrics should I track for a {} app?", surface),
      format!("How do I optimize {} app performance?", p.framework),
    ],
    template: format!(
      "Ask: \"How do I test and optimize performance for my {} todo app? I need to: measure load times, identify bottlenecks, optimize API calls, {}, improve rendering performance, and set up performance monitoring. Provide tools and techniques.\"",
      p.framework,
      c.by_platform("optimize mobile performance", "optimize bundle size")
    ),
    tips: strs!["Ask for performance testing tools", "Request optimization techniques", "Learn about profiling", "Get performance benchmarks"],
  });

  out.push(StepDraft {
    id: "quality-4",
    title: "Write Documentation".into(),
    description: format!("Create comprehensive documentation for your {} application.", p.name),
    objective: "Learn documentation best practices. Learn how to use ChatGPT for documentation.".into(),
    step_type: StepType::Configuration,
    order: 22,
    coffee_cost: 10,
    xp_reward: 20,
    depends_on: &["quality-3"],
    tool: "chatgpt",
    instructions: strs![
      "Step 1: Go to chat.openai.com",
      "Step 2: Ask: \"Help me write documentation for my todo app\"",
      "Step 3: Create README with setup instructions",
      "Step 4: Document API endpoints",
      "Step 5: Write code comments",
      "Step 6: Create user guide",
    ],
    prompts: strs![
      format!("Help me write a README for my {} todo app", p.name),
      format!("How do I document {} components?", p.framework),
      "Create API documentation for my todo app",
    ],
    template: format!(
      "Ask ChatGPT: \"Help me write comprehensive documentation for my {} todo app. I need: README with setup instructions, API documentation, component documentation, deployment guide, and user guide. Provide templates and examples.\"",
      p.name
    ),
    tips: strs!["Request documentation templates", "Ask for best practices", "Get examples", "Learn about documentation tools"],
  });
}

fn production(c: &StepCtx, out: &mut Vec<StepDraft>) {
  let p = c.profile;
  let arch = c.is_architect();

  out.push(StepDraft {
    id: "prod-1",
    title: "Set Up Environment Variables".into(),
    description: "Configure environment variables for different environments.".into(),
    objective: format!(
      "Understand environment configuration and security. Learn how to use {} for environment setup.",
      if arch { "Perplexity" } else { "Gemini" }
    ),
    step_type: StepType::Configuration,
    order: 23,
    coffee_cost: 10,
    xp_reward: 20,
    depends_on: &["quality-4"],
    tool: if arch { "perplexity" } else { "gemini" },
    instructions: strs![
      if arch { "Step 1: Go to perplexity.ai" } else { "Step 1: Go to gemini.google.com" },
      format!("Step 2: Ask: \"How do I set up environment variables for a {} app?\"", p.name),
      "Step 3: Learn about .env files",
      "Step 4: Get examples for different environments",
      "Step 5: Understand security best practices",
      "Step 6: Create .env files for your project",
    ],
    prompts: strs![
      "How do I set up environment variables for development and production?",
      format!("What should I put in .env files for a {} app?", p.name),
    ],
    template: format!(
      "Ask: \"How do I set up environment variables for my {} application? I need .env files for different environments, how to access variables in code, security best practices, and what to include in .gitignore.\"",
      p.name
    ),
    tips: strs!["Ask for .env file examples", "Learn about security practices", "Understand environment-specific configs"],
  });

  out.push(StepDraft {
    id: "prod-2",
    title: "Configure CI/CD Pipeline".into(),
    description: "Set up automated testing and deployment.".into(),
    objective: format!(
      "Learn continuous integration and deployment practices. Learn how to use {} for CI/CD setup.",
      if arch { "Phind" } else { "Claude" }
    ),
    step_type: StepType::Deployment,
    order: 24,
    coffee_cost: 25,
    xp_reward: 50,
    depends_on: &["prod-1"],
    tool: if arch { "phind" } else { "claude" },
    instructions: strs![
      if arch { "Step 1: Go to phind.com" } else { "Step 1: Go to claude.ai" },
      format!("Step 2: Ask: \"How do I set up a CI/CD pipeline for a {} app?\"", p.name),
      "Step 3: Review CI/CD strategy and tools",
      "Step 4: Ask for GitHub Actions or similar examples",
      "Step 5: Learn about automated testing in CI",
      "Step 6: Set up your CI/CD pipeline",
    ],
    prompts: strs![
      format!("How do I set up GitHub Actions for my {} app?", p.framework),
      format!("What's the best CI/CD pipeline for a {} app?", c.by_platform("mobile", "full-stack")),
    ],
    template: format!(
      "Ask: \"How do I set up a CI/CD pipeline for my {} todo app? I need automated testing before deployment, build process, deployment to production, and GitHub Actions or similar. Please provide a complete setup guide.\"",
      p.name
    ),
    tips: strs!["Ask for complete CI/CD strategy", "Request configuration file examples", "Learn about different CI/CD tools"],
  });

  out.push(StepDraft {
    id: "prod-3",
    title: "Build for Production".into(),
    description: format!("Optimize and build your {} application for production.", p.framework),
    objective: format!(
      "Understand build processes and optimization. Learn how to use {} for build configuration.",
      if c.is_co_pilot() { "Cursor Composer" } else { "Cursor" }
    ),
    step_type: StepType::Deployment,
    order: 25,
    coffee_cost: 15,
    xp_reward: 30,
    depends_on: &["prod-2"],
    tool: if c.is_co_pilot() { "cursor-composer" } else { "cursor" },
    instructions: if c.is_co_pilot() {
      strs![
        "Step 1: Press Cmd+I to open Cursor Composer",
        "Step 2: Describe build optimization needs",
        "Step 3: Cursor generates build config changes",
        "Step 4: Review all changes",
      ]
    } else {
      strs![
        format!("Step 1: Open {} or build config file", c.by_platform("pubspec.yaml", "vite.config.ts")),
        "Step 2: Press Cmd+K for inline edit",
        "Step 3: Ask: \"Optimize build configuration for production\"",
        "Step 4: Review optimization suggestions",
        "Step 5: Run build command and test",
      ]
    },
    prompts: strs![
      format!("Optimize my {} build configuration for production", c.by_platform("Flutter", "Vite")),
      format!("Add code splitting and minification to my {}", c.by_platform("Flutter", "build")),
    ],
    template: format!(
      "Use {}: \"Optimize my build configuration for production with code splitting, minification, tree shaking, asset optimization, and source maps for debugging.\"",
      if c.is_co_pilot() { "Cursor Composer" } else { "Cursor inline edit" }
    ),
    tips: strs!["Ask for production optimizations", "Request bundle size improvements", "Test build output"],
  });

  out.push(StepDraft {
    id: "prod-4",
    title: c.by_platform("Deploy to App Store/Play Store", "Deploy to Production").into(),
    description: c
      .by_platform("Deploy your Flutter app to app stores.", "Deploy your application to a hosting platform.")
      .into(),
    objective: format!(
      "Learn {} strategies and {} configuration. Learn how to use ChatGPT for deployment help.",
      c.by_platform("app store", "deployment"),
      c.by_platform("store", "platform")
    ),
    step_type: StepType::Deployment,
    order: 26,
    coffee_cost: 30,
    xp_reward: 60,
    depends_on: &["prod-3"],
    tool: "chatgpt",
    instructions: strs![
      "Step 1: Go to chat.openai.com",
      format!(
        "Step 2: Ask: \"How do I deploy a {} app {}?\"",
        p.name,
        c.by_platform("to the App Store and Play Store", "to Vercel/Netlify")
      ),
      "Step 3: Review deployment steps",
      "Step 4: Ask about platform-specific requirements",
      "Step 5: Learn about environment variables in production",
      format!("Step 6: Deploy your {}", c.by_platform("app", "application")),
    ],
    prompts: strs![
      c.by_platform(
        "How do I deploy my Flutter app to the App Store?".to_string(),
        format!("How do I deploy my {} app to Vercel?", p.framework),
      ),
      format!("What's the best way to deploy a {} app?", c.by_platform("mobile", "full-stack")),
    ],
    template: format!(
      "Ask ChatGPT: \"How do I deploy my {} todo app {}? I need {}. Please provide a complete guide.\"",
      p.name,
      c.by_platform("to the App Store and Play Store", "to production"),
      c.by_platform(
        "store listing requirements, app signing, and submission process",
        "platform recommendations (Vercel, Netlify, etc.), step-by-step deployment process, environment variable setup, and domain configuration",
      )
    ),
    tips: strs!["Ask for platform-specific guides", "Request step-by-step instructions", "Learn about deployment best practices"],
  });

  out.push(StepDraft {
    id: "prod-5",
    title: "Monitor and Optimize".into(),
    description: "Set up monitoring and optimize performance.".into(),
    objective: format!(
      "Understand production monitoring and optimization. Learn how to use {} for performance optimization.",
      if arch { "Perplexity" } else { "Claude" }
    ),
    step_type: StepType::Deployment,
    order: 27,
    coffee_cost: 20,
    xp_reward: 40,
    depends_on: &["prod-4"],
    tool: if arch { "perplexity" } else { "claude" },
    instructions: strs![
      if arch { "Step 1: Go to perplexity.ai" } else { "Step 1: Go to claude.ai" },
      format!("Step 2: Ask: \"How do I monitor and optimize a {} app in production?\"", p.framework),
      "Step 3: Review monitoring tools and strategies",
      "Step 4: Learn about performance optimization",
      "Step 5: Ask for code examples",
      "Step 6: Implement monitoring and optimizations",
    ],
    prompts: strs![
      format!("What tools should I use to monitor my {} app in production?", p.framework),
      format!("How do I optimize {} app performance?", p.framework),
    ],
    template: format!(
      "Ask: \"How do I monitor and optimize my {} todo app in production? I need performance monitoring tools, error tracking, analytics setup, performance optimization techniques, and best practices for production apps.\"",
      p.framework
    ),
    tips: strs!["Ask for monitoring tool recommendations", "Learn about performance metrics", "Request optimization techniques"],
  });
}
