//! UI skeleton steps: shell, list, item, form, styling, responsiveness, navigation.

use crate::domain::{CurriculumStep, DecisionCategory, DecisionPoint, PlayerClass, VerificationChallenge, VerificationMode};
use crate::resources::Consequences;

use super::{option, step_decision, verify_id, ChallengeContext};

pub(super) mod skeleton_0 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🐚 The App Shell Strategy",
      DecisionCategory::TechnicalChoice,
      "Starting the app shell. Do you:

A) Generate with AI
\"Hey Cursor, create a todo app shell with header, main content, and footer\"

B) Build from scratch
Open docs, write every line yourself

C) Copy from a previous project
You have a similar shell somewhere..."
        .to_string(),
      vec![
        option(
          "ai-generate",
          "Let AI generate it",
          "One prompt, instant shell",
          Consequences::new().sanity(10).coffee(10).xp(20).tech_debt(10).ai_trust(-5),
          ctx.is(PlayerClass::VibeSurfer),
          "Fast but you might not understand what was generated.",
        ),
        option(
          "from-scratch",
          "Build from scratch",
          "Type every character yourself",
          Consequences::new().sanity(-10).coffee(-15).xp(45).tech_debt(-10).code_quality(20),
          ctx.is(PlayerClass::Architect),
          "You understand every line. That's valuable!",
        ),
        option(
          "hybrid",
          "AI generates, you review & modify",
          "Generate then understand and adjust",
          Consequences::new().sanity(5).coffee(0).xp(35).tech_debt(0).ai_trust(5),
          ctx.is(PlayerClass::CoPilot),
          "Best of both worlds. Speed + understanding.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "Scaffold(
  appBar: AppBar(
    title: Text('My Todos'),
    actions: [
      IconButton(icon: Icon(Icons.search), onPressed: () {}),
      IconButton(icon: Icon(Icons.more_vert), onPressed: () {}),
    ],
  ),
  body: Center(child: Text('No todos yet!')),
  floatingActionButton: FloatingActionButton(
    onPressed: () {},
    child: Icon(Icons.add),
  ),
  bottomNavigationBar: BottomNavigationBar(
    items: [
      BottomNavigationBarItem(icon: Icon(Icons.list), label: 'All'),
      BottomNavigationBarItem(icon: Icon(Icons.check), label: 'Done'),
    ],
  ),
)

Describe the visual layout:",
      "function App() {
  return (
    <div className=\"min-h-screen bg-gray-100\">
      <header className=\"bg-blue-600 text-white p-4\">
        <h1 className=\"text-2xl font-bold\">My Todos</h1>
      </header>

      <main className=\"max-w-md mx-auto p-4\">
        <p className=\"text-gray-500 text-center\">No todos yet!</p>
      </main>

      <footer className=\"fixed bottom-0 w-full bg-white p-4 shadow-lg\">
        <button className=\"w-full bg-blue-600 text-white py-2 rounded\">
          + Add Todo
        </button>
      </footer>
    </div>
  );
}

Describe the visual layout:",
    );
    let (expected, distractors): (&str, [&str; 3]) = ctx.by_framework(
      (
        "App bar with title and icons, empty center message, FAB button bottom right, bottom nav with tabs",
        [
          "Full-screen list of todos with a search field at the top",
          "App bar only; the body stays blank until a todo is added",
          "Side drawer with navigation links and a centered add button",
        ],
      ),
      (
        "Blue header, centered content area with empty message, sticky footer with add button",
        [
          "Gray header with a sidebar and a scrolling list of todos",
          "Blue full-screen modal asking for the first todo",
          "Centered card with a form, no header and no footer",
        ],
      ),
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::PredictOutput,
      "🐚 What Does This Shell Render?",
      "Describe what this app shell looks like when rendered:",
    )
    .code(code)
    .expect(expected, &distractors)
    .concepts(&["layout", "header", "main", "footer", "visual hierarchy"])
    .rewards(30, 10)
  }
}

pub(super) mod skeleton_1 {
  use super::*;

  pub fn decision(step: &CurriculumStep, _ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "📋 List Rendering Approach",
      DecisionCategory::QualityTradeoff,
      "Building the TodoList. You need to render multiple items.

For 10 items: Any approach works fine.
For 1,000 items: Performance matters!
For 10,000 items: You need virtualization.

Your current design has... wait, how many todos will users have?

\"Probably like 10-20\" says the PM.
\"But what if they have more?\" asks QA."
        .to_string(),
      vec![
        option(
          "simple-map",
          "Simple .map() rendering",
          "todos.map(todo => <TodoItem />)",
          Consequences::new().sanity(10).coffee(5).xp(30).tech_debt(5),
          true,
          "For a todo app, simple .map() is perfect. Don't over-optimize!",
        ),
        option(
          "virtualized",
          "Add virtualization now",
          "Use react-window or ListView.builder",
          Consequences::new().sanity(-10).coffee(-15).xp(25).tech_debt(-5),
          false,
          "Premature optimization. Wait until you have a real performance problem.",
        ),
        option(
          "pagination",
          "Paginate the list",
          "Show 10 at a time with \"Load More\"",
          Consequences::new().sanity(0).coffee(-10).xp(20).tech_debt(0),
          false,
          "Pagination adds UX complexity. Only needed for huge lists.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "class TodoList extends StatelessWidget {
  final List<Todo> todos;

  @override
  Widget build(BuildContext context) {
    return ListView(
      children: todos.map((todo) => TodoItem(todo: todo)).toList(),
      // ^ BUG: What's missing here?
    );
  }
}

// When you reorder todos, what goes wrong?",
      "function TodoList({ todos }) {
  return (
    <ul>
      {todos.map((todo) => (
        <TodoItem todo={todo} />
        // ^ BUG: What's missing here?
      ))}
    </ul>
  );
}

// React will warn you about this!",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::SpotTheBug,
      "📋 Fix This List Component",
      "This TodoList has a common bug. Find it:",
    )
    .code(code)
    .concepts(&["key prop", "list rendering", "reconciliation", "unique identifier"])
    .bug(
      ctx.by_framework(7, 5),
      "Missing key prop",
      ctx.by_framework(
        "Need key: ValueKey(todo.id) for efficient list updates!",
        "Missing key prop! Should be: <TodoItem key={todo.id} todo={todo} />",
      ),
    )
    .rewards(40, 15)
  }
}

pub(super) mod skeleton_2 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "✅ The Checkbox Conundrum",
      DecisionCategory::TechnicalChoice,
      "Designing the TodoItem checkbox interaction.

Option A: Click anywhere to toggle
The whole row is clickable

Option B: Only checkbox toggles
Click text to edit, checkbox to complete

Option C: Swipe to complete (mobile)
Gesture-based interaction

The designer says \"whatever feels natural.\"
Thanks, that's not helpful at all."
        .to_string(),
      vec![
        option(
          "click-anywhere",
          "Click anywhere to toggle",
          "Whole row is one big button",
          Consequences::new().sanity(5).coffee(5).xp(25).tech_debt(0),
          ctx.is(PlayerClass::VibeSurfer),
          "Simple and touch-friendly. Good for mobile.",
        ),
        option(
          "checkbox-only",
          "Checkbox toggles, text for edit",
          "Separate concerns, more precise",
          Consequences::new().sanity(-5).coffee(-5).xp(40).tech_debt(-5).code_quality(15),
          true,
          "Clear affordances. Users know what each click does.",
        ),
        option(
          "swipe-gesture",
          "Swipe gestures",
          "Swipe right = done, swipe left = delete",
          Consequences::new().sanity(-15).coffee(-20).xp(30).tech_debt(10),
          false,
          "Gestures are cool but hard to discover. Add as enhancement later.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "ListTile(
  leading: Checkbox(
    value: todo.completed,
    onChanged: (value) => onToggle(todo.id),
  ),
  title: Text(
    todo.title,
    style: TextStyle(
      decoration: todo.completed
        ? TextDecoration.lineThrough
        : TextDecoration.none,
      color: todo.completed ? Colors.grey : Colors.black,
    ),
  ),
  trailing: IconButton(
    icon: Icon(Icons.delete),
    onPressed: () => onDelete(todo.id),
  ),
)

Explain what each part does:
- leading: ___
- title style: ___
- trailing: ___",
      "<li className=\"flex items-center gap-3 p-3 bg-white rounded shadow\">
  <input
    type=\"checkbox\"
    checked={todo.completed}
    onChange={() => onToggle(todo.id)}
    className=\"w-5 h-5\"
  />
  <span className={`flex-1 ${todo.completed ? 'line-through text-gray-400' : ''}`}>
    {todo.title}
  </span>
  <button onClick={() => onDelete(todo.id)} className=\"text-red-500\">
    🗑️
  </button>
</li>

Explain what each part does:
- checkbox: ___
- span className: ___
- button: ___",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "✅ Explain This TodoItem",
      "What does each part of this TodoItem do?",
    )
    .code(code)
    .concepts(&["checkbox", "conditional styling", "event handlers", "accessibility"])
    .rewards(30, 10)
  }
}

pub(super) mod skeleton_3 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "📝 Form or No Form?",
      DecisionCategory::TechnicalChoice,
      "Adding the \"new todo\" input. Options:

A) Inline input (always visible)
Input at top/bottom, type and hit Enter

B) Modal form
Button opens modal with full form

C) Floating Action Button (mobile pattern)
FAB opens bottom sheet with input

The PM wants \"whatever Twitter does.\"
(Twitter doesn't have todos...)"
        .to_string(),
      vec![
        option(
          "inline",
          "Inline input always visible",
          "Simple text input, Enter to submit",
          Consequences::new().sanity(10).coffee(5).xp(35).tech_debt(-5),
          true,
          "Fastest UX for adding todos. No friction!",
        ),
        option(
          "modal",
          "Modal form",
          "Click button → modal → form → submit",
          Consequences::new().sanity(-5).coffee(-10).xp(25).tech_debt(5),
          false,
          "Modal adds friction. Save modals for complex forms.",
        ),
        option(
          "fab-sheet",
          "FAB + Bottom sheet",
          "Material Design mobile pattern",
          Consequences::new().sanity(-10).coffee(-15).xp(30).tech_debt(5),
          ctx.is_flutter(),
          ctx.by_framework("Flutter/Material pattern. Good for mobile!", "Over-engineering for a web app."),
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "TextField(
  controller: _controller,
  decoration: InputDecoration(
    hintText: 'Add todo...',
  ),
)

// Bugs:
// 1. How do you submit? (no button, no onSubmitted)
// 2. What happens after submit? (input not cleared)
// 3. Can you add empty todos? (no validation)

// Fix these issues!",
      "function AddTodo({ onAdd }) {
  const [text, setText] = useState('');

  return (
    <input
      value={text}
      onChange={(e) => setText(e.target.value)}
      placeholder=\"Add todo...\"
    />
  );
  // Bugs:
  // 1. How do you submit? (no form, no Enter key handler)
  // 2. What happens after submit? (text not cleared)
  // 3. Can you add empty todos? (no validation)
}",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::SpotTheBug,
      "📝 Fix This Form",
      "This add-todo form has UX bugs. Find them:",
    )
    .code(code)
    .concepts(&["form submission", "validation", "clearing input", "Enter key"])
    .bug(5, "Missing submit handler and validation", "Need: onSubmit handler, clear input after add, validate non-empty!")
    .rewards(40, 15)
  }
}

pub(super) mod skeleton_4 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🎨 The Pixel Perfect Trap",
      DecisionCategory::QualityTradeoff,
      "The designer sent a Figma mockup. It's beautiful.
But matching it EXACTLY would take 3x longer.

Designer: \"Can you match this pixel-perfect?\"
PM: \"We need to ship by Friday.\"
You: Looking at 47 custom spacing values...

What do you do?"
        .to_string(),
      vec![
        option(
          "pixel-perfect",
          "Match Figma exactly",
          "Every shadow, every gradient, every pixel",
          Consequences::new().sanity(-25).coffee(-30).xp(20).tech_debt(15),
          false,
          "Pixel-perfect takes forever and users won't notice most details.",
        ),
        option(
          "system-tokens",
          "Use design system tokens",
          "Close enough with consistent spacing/colors",
          Consequences::new().sanity(5).coffee(-5).xp(40).tech_debt(-10).code_quality(20),
          true,
          "Design systems = consistent + maintainable. 80% of the look, 20% of the effort.",
        ),
        option(
          "minimal",
          "Minimal styling (ship fast)",
          "Basic styling, polish later",
          Consequences::new().sanity(15).coffee(10).xp(20).tech_debt(20),
          ctx.is(PlayerClass::VibeSurfer),
          "Sometimes ugly but working beats beautiful but delayed.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "// INCONSISTENT STYLING
Container(margin: EdgeInsets.only(left: 12, right: 17, top: 8)),
Container(margin: EdgeInsets.only(left: 15, right: 12, top: 11)),
Container(margin: EdgeInsets.only(left: 13, right: 16, top: 9)),

// Magic numbers everywhere!
Text('Title', style: TextStyle(fontSize: 17)),
Text('Body', style: TextStyle(fontSize: 14)),
Text('Small', style: TextStyle(fontSize: 11)),

// What problems do you see?
// How would you fix this?",
      "/* INCONSISTENT STYLING */
.todo-item-1 { margin: 12px 17px 8px; }
.todo-item-2 { margin: 15px 12px 11px; }
.todo-item-3 { margin: 13px 16px 9px; }

/* Magic colors */
.header { color: #3b82f6; }
.button { color: #3a81f5; }  /* Almost the same? */
.link { color: #3c83f7; }    /* Why different? */

/* What problems do you see?
   How would you fix this? */",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🎨 Critique This Styling",
      "What's wrong with this styling approach?",
    )
    .code(code)
    .concepts(&["design tokens", "consistency", "magic numbers", "theme"])
    .rewards(35, 10)
  }
}

pub(super) mod skeleton_5 {
  use super::*;

  pub fn decision(step: &CurriculumStep, _ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "📱 Mobile First or Desktop First?",
      DecisionCategory::TechnicalChoice,
      "Making the app responsive. Your analytics say:

60% mobile users
30% desktop users
10% tablet users

Do you design mobile-first and scale up?
Or desktop-first and squeeze down?

The designer only gave you a mobile mockup."
        .to_string(),
      vec![
        option(
          "mobile-first",
          "Mobile first",
          "Start small, add complexity for larger screens",
          Consequences::new().sanity(5).coffee(-5).xp(40).tech_debt(-10).code_quality(20),
          true,
          "Mobile-first = simpler base styles. Matches your user distribution too!",
        ),
        option(
          "desktop-first",
          "Desktop first",
          "Full layout, then hide things on mobile",
          Consequences::new().sanity(-5).coffee(-10).xp(25).tech_debt(10),
          false,
          "Desktop-first means more overrides for mobile. More CSS, more bugs.",
        ),
        option(
          "ignore-responsive",
          "Skip responsiveness for now",
          "Fixed width, works on desktop",
          Consequences::new().sanity(15).coffee(10).xp(10).tech_debt(30),
          false,
          "60% of your users are on mobile! This is a bad trade-off.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "LayoutBuilder(
  builder: (context, constraints) {
    if (constraints.maxWidth < 600) {
      // Mobile
      return Column(children: [todoList, addButton]);
    } else {
      // Desktop
      return Row(
        children: [
          Expanded(flex: 2, child: todoList),
          Expanded(flex: 1, child: sidebar),
        ],
      );
    }
  },
)

At 400px width: ___
At 800px width: ___
At 1200px width: ___",
      "<div className=\"
  flex flex-col          /* Mobile: stack vertically */
  md:flex-row            /* Desktop: side by side */
  md:max-w-4xl md:mx-auto
\">
  <main className=\"flex-1 p-4\">
    {/* Todo list */}
  </main>
  <aside className=\"
    hidden md:block      /* Hidden on mobile! */
    w-64 p-4 bg-gray-50
  \">
    {/* Sidebar */}
  </aside>
</div>

At 375px (mobile): ___
At 768px (tablet): ___
At 1200px (desktop): ___",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::PredictOutput,
      "📱 How Does This Behave?",
      "What happens at different screen sizes?",
    )
    .code(code)
    .expect(
      "Mobile: single column, no sidebar. Desktop: two columns with sidebar.",
      &[
        "Two columns with sidebar at every width.",
        "Mobile: sidebar stacked above the list. Desktop: single column.",
        "Single column at every width, sidebar always hidden.",
      ],
    )
    .concepts(&["responsive", "breakpoints", "mobile-first", "media queries"])
    .rewards(35, 10)
  }
}

pub(super) mod skeleton_6 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🧭 Routing Complexity",
      DecisionCategory::TechnicalChoice,
      "Setting up navigation. Your todo app needs:

- Main todo list view
- Individual todo detail view (maybe?)
- Settings page (eventually)

Do you need a full router, or is simpler state-based navigation enough?"
        .to_string(),
      vec![
        option(
          "full-router",
          "Full routing library",
          "React Router, Go Router, etc.",
          Consequences::new().sanity(-10).coffee(-15).xp(30).tech_debt(-5),
          ctx.is(PlayerClass::Architect),
          "Good for deep linking and browser history. Might be overkill for MVP.",
        ),
        option(
          "state-based",
          "Simple state-based views",
          "useState for currentView, switch/case render",
          Consequences::new().sanity(10).coffee(5).xp(35).tech_debt(5),
          true,
          "For a simple app, state-based is simpler. Add router when you need URLs.",
        ),
        option(
          "single-page",
          "No navigation needed",
          "Everything on one page",
          Consequences::new().sanity(15).coffee(10).xp(20).tech_debt(10),
          ctx.is(PlayerClass::VibeSurfer),
          "Simplest option. Works for MVP!",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "// Simple navigation with Navigator
Navigator.push(context, MaterialPageRoute(
  builder: (context) => TodoDetailScreen(todo: todo),
));

// vs Navigator 2.0 / GoRouter
GoRouter(
  routes: [
    GoRoute(path: '/', builder: (_, __) => HomeScreen()),
    GoRoute(path: '/todo/:id', builder: (_, state) =>
      TodoDetailScreen(id: state.params['id']!)),
  ],
)

When would you use each approach?",
      "// Option A: State-based
const [view, setView] = useState('list');

{view === 'list' && <TodoList />}
{view === 'detail' && <TodoDetail />}
{view === 'settings' && <Settings />}

// Option B: React Router
<Routes>
  <Route path=\"/\" element={<TodoList />} />
  <Route path=\"/todo/:id\" element={<TodoDetail />} />
  <Route path=\"/settings\" element={<Settings />} />
</Routes>

When would you use each approach?",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🧭 Explain This Navigation",
      "How does this navigation work?",
    )
    .code(code)
    .concepts(&["navigation", "routing", "deep linking", "state management"])
    .rewards(35, 10)
  }
}
