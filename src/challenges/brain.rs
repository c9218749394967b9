//! Logic steps (types, state, persistence, sync, filtering, errors) plus the testing and
//! deployment steps.

use crate::domain::{CurriculumStep, DecisionCategory, DecisionPoint, PlayerClass, VerificationChallenge, VerificationMode};
use crate::resources::Consequences;

use super::{option, step_decision, verify_id, ChallengeContext};

pub(super) mod brain_0 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🧠 Type System Philosophy",
      DecisionCategory::TechnicalChoice,
      "Defining the Todo type. How detailed should it be?

Minimal: { id, title, completed }
Full: { id, title, description, completed, priority, dueDate, tags, createdAt, updatedAt, ... }

The PM says \"we might need priority later.\"
Your gut says \"YAGNI.\""
        .to_string(),
      vec![
        option(
          "minimal-type",
          "Minimal type",
          "Just id, title, completed",
          Consequences::new().sanity(10).coffee(5).xp(30).tech_debt(5),
          true,
          "Start minimal! Adding fields is easy. Removing them is hard.",
        ),
        option(
          "full-featured",
          "Full-featured type",
          "All possible fields upfront",
          Consequences::new().sanity(-10).coffee(-15).xp(25).tech_debt(15),
          false,
          "You're building features nobody asked for. Classic over-engineering.",
        ),
        option(
          "extensible",
          "Extensible base type",
          "Minimal + optional metadata field",
          Consequences::new().sanity(0).coffee(-5).xp(35).tech_debt(0).code_quality(10),
          ctx.is(PlayerClass::CoPilot),
          "Good balance. Room to grow without upfront complexity.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "class Todo {
  dynamic id;        // Bug 1
  String? title;     // Bug 2
  var completed;     // Bug 3

  Todo({this.id, this.title, this.completed});
}

// Find the type safety issues!",
      "interface Todo {
  id: any;           // Bug 1
  title?: string;    // Bug 2
  completed: any;    // Bug 3
}

// Find the type safety issues!",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::SpotTheBug,
      "🧠 Fix This Type Definition",
      "This Todo type has issues. Find them:",
    )
    .code(code)
    .concepts(&["type safety", "nullability", "validation", "type inference"])
    .bug(
      2,
      "Using any/dynamic types",
      "Types should be specific: id: string, title: string (with validation), completed: boolean",
    )
    .rewards(40, 15)
  }
}

pub(super) mod brain_1 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🧠 State Management Wars",
      DecisionCategory::TechnicalChoice,
      format!(
        "Time to add state management to your {}.

The eternal debate rages on Twitter...
Your team lead is on vacation.
Stack Overflow has 47 conflicting answers.

Choose wisely - this affects everything downstream.",
        ctx.stack.display_name()
      ),
      vec![
        option(
          "simple-state",
          ctx.by_framework("StatefulWidget + setState", "useState + props"),
          "Built-in, simple, no dependencies",
          Consequences::new().sanity(10).coffee(5).xp(25).tech_debt(10),
          ctx.is(PlayerClass::VibeSurfer),
          "Simple and effective for small apps. May need refactoring as it grows.",
        ),
        option(
          "light-state-lib",
          ctx.by_framework("Provider / Riverpod", "Zustand / Jotai"),
          "Lightweight, minimal boilerplate",
          Consequences::new().sanity(5).coffee(-5).xp(40).tech_debt(-5).code_quality(20),
          true,
          "Great balance of simplicity and scalability. Modern best practice!",
        ),
        option(
          "heavy-state-lib",
          ctx.by_framework("BLoC / Clean Architecture", "Redux + Toolkit + Saga"),
          "Enterprise-grade, maximum structure",
          Consequences::new().sanity(-20).coffee(-25).xp(25).tech_debt(20).code_quality(-5),
          false,
          "Massive overkill for a todo app. You'll spend more time on boilerplate than features.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "class TodoNotifier extends StateNotifier<List<Todo>> {
  TodoNotifier() : super([]);

  void addTodo(String title) {
    state = [...state, Todo(id: uuid(), title: title)];
  }

  void toggleTodo(String id) {
    state = state.map((t) =>
      t.id == id ? t.copyWith(completed: !t.completed) : t
    ).toList();
  }

  void removeTodo(String id) {
    state = state.where((t) => t.id != id).toList();
  }
}",
      "const useTodoStore = create((set) => ({
  todos: [],

  addTodo: (title) => set((state) => ({
    todos: [...state.todos, { id: Date.now(), title, completed: false }]
  })),

  toggleTodo: (id) => set((state) => ({
    todos: state.todos.map(t =>
      t.id === id ? { ...t, completed: !t.completed } : t
    )
  })),

  removeTodo: (id) => set((state) => ({
    todos: state.todos.filter(t => t.id !== id)
  })),
}));",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🧠 Explain This State Code",
      "How does this state management work?",
    )
    .code(code)
    .concepts(&["immutability", "state updates", "spread operator", "map/filter"])
    .rewards(45, 15)
  }
}

pub(super) mod brain_1_5 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "💾 Where to Store Data?",
      DecisionCategory::TechnicalChoice,
      "Your todos disappear on refresh. Users are angry.

Options:
A) Local storage (simple, device-only)
B) Backend database (complex, syncs everywhere)
C) Local first, sync later (best of both?)

The PM: \"Users want to see todos on their phone AND laptop.\"
Also the PM: \"Ship it by Friday.\""
        .to_string(),
      vec![
        option(
          "local-storage",
          "Local storage only",
          ctx.by_framework("SharedPreferences / Hive", "localStorage / IndexedDB"),
          Consequences::new().sanity(10).coffee(5).xp(30).tech_debt(10),
          ctx.is(PlayerClass::VibeSurfer),
          "Simple and works offline. Cross-device sync comes later.",
        ),
        option(
          "firebase",
          "Cloud database",
          ctx.by_framework("Firebase Firestore", "Firebase or Supabase"),
          Consequences::new().sanity(-5).coffee(-15).xp(45).tech_debt(-10).code_quality(15),
          ctx.is_flutter() || ctx.is(PlayerClass::Architect),
          "Real-time sync across devices. More setup but users get what they asked for.",
        ),
        option(
          "local-then-cloud",
          "Local first, cloud later",
          "Ship with local storage, plan the sync layer",
          Consequences::new().sanity(5).coffee(-5).xp(35).tech_debt(5),
          ctx.is(PlayerClass::CoPilot),
          "Pragmatic. Ship Friday, sync next sprint.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "Future<void> saveTodos(List<Todo> todos) async {
  final prefs = await SharedPreferences.getInstance();
  prefs.setString('todos', todos.toString());  // Bug!
}

Future<List<Todo>> loadTodos() async {
  final prefs = await SharedPreferences.getInstance();
  final data = prefs.getString('todos');
  return data as List<Todo>;  // Bug!
}",
      "function saveTodos(todos) {
  localStorage.setItem('todos', todos);  // Bug!
}

function loadTodos() {
  const data = localStorage.getItem('todos');
  return data || [];  // Bug!
}",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::SpotTheBug,
      "💾 Fix This Persistence Code",
      "This save/load code loses data. Find the bugs:",
    )
    .code(code)
    .concepts(&["JSON serialization", "parsing", "type conversion", "localStorage"])
    .bug(2, "Not JSON serializing", "Must JSON.stringify when saving and JSON.parse when loading!")
    .rewards(40, 15)
  }
}

pub(super) mod brain_2 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "⚡ Optimistic or Pessimistic?",
      DecisionCategory::TechnicalChoice,
      "User clicks \"complete todo\". Do you:

A) Optimistic: Update UI immediately, sync in background
   Fast UX, but what if the save fails?

B) Pessimistic: Wait for server, then update UI
   Always accurate, but feels slow

C) Local only: No server sync at all
   Simple, but data stays on one device"
        .to_string(),
      vec![
        option(
          "optimistic",
          "Optimistic updates",
          "Instant UI, rollback on failure",
          Consequences::new().sanity(-5).coffee(-10).xp(45).tech_debt(5).code_quality(15),
          true,
          "Modern apps feel instant. Just handle the rollback properly!",
        ),
        option(
          "pessimistic",
          "Wait for the server",
          "Spinner until the save succeeds",
          Consequences::new().sanity(5).coffee(5).xp(30).tech_debt(-5),
          false,
          "Safe but sluggish. Users notice every spinner.",
        ),
        option(
          "local-only",
          "Local only",
          "Skip the sync entirely",
          Consequences::new().sanity(15).coffee(10).xp(20).tech_debt(15),
          ctx.is(PlayerClass::VibeSurfer),
          "Fine for an MVP. Sync becomes a problem later.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "Future<void> toggleTodo(String id) async {
  final previous = state;
  state = state.map((t) =>
    t.id == id ? t.copyWith(completed: !t.completed) : t
  ).toList();

  try {
    await firestore.collection('todos').doc(id).update({
      'completed': state.firstWhere((t) => t.id == id).completed,
    });
  } catch (e) {
    state = previous;
    showError('Could not save. Try again.');
  }
}",
      "async function toggleTodo(id) {
  const previous = todos;
  setTodos(todos.map(t =>
    t.id === id ? { ...t, completed: !t.completed } : t
  ));

  try {
    await api.patch(`/todos/${id}`, { toggle: true });
  } catch (err) {
    setTodos(previous);
    toast.error('Could not save. Try again.');
  }
}",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "⚡ Trace This Update Flow",
      "Walk through what happens when the save fails:",
    )
    .code(code)
    .concepts(&["optimistic update", "rollback", "error handling", "async/await"])
    .rewards(45, 15)
  }
}

pub(super) mod brain_3 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🔍 Filter UX Decision",
      DecisionCategory::TechnicalChoice,
      "Adding All / Active / Completed filters.

Where does the current filter live?

A) In the URL (?filter=active)
B) In component state
C) Derived from a single filter value, computed on render

Users will definitely bookmark the \"Active\" view. Right?"
        .to_string(),
      vec![
        option(
          "url-params",
          "URL query params",
          "Shareable, bookmarkable filters",
          Consequences::new().sanity(-10).coffee(-15).xp(40).tech_debt(-5).code_quality(15),
          ctx.is(PlayerClass::Architect),
          "Great for deep links. More wiring than a todo app strictly needs.",
        ),
        option(
          "local-state",
          "Local component state",
          "A filter variable next to the list",
          Consequences::new().sanity(10).coffee(5).xp(25).tech_debt(5),
          ctx.is(PlayerClass::VibeSurfer),
          "Quick and easy. Resets on refresh.",
        ),
        option(
          "derived-state",
          "Derived filtered list",
          "Store the filter, compute the visible todos",
          Consequences::new().sanity(0).coffee(-5).xp(35).tech_debt(-5).code_quality(10),
          true,
          "One source of truth. The visible list can never drift out of sync.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "final todos = [
  Todo(title: 'Buy milk', completed: true),
  Todo(title: 'Walk dog', completed: false),
  Todo(title: 'Code app', completed: false),
  Todo(title: 'Sleep', completed: true),
];

List<Todo> filtered(Filter f) => switch (f) {
  Filter.active => todos.where((t) => !t.completed).toList(),
  Filter.completed => todos.where((t) => t.completed).toList(),
  Filter.all => todos,
};

What does each filter return?",
      "const todos = [
  { title: 'Buy milk', completed: true },
  { title: 'Walk dog', completed: false },
  { title: 'Code app', completed: false },
  { title: 'Sleep', completed: true },
];

const filtered = (filter) =>
  filter === 'active' ? todos.filter(t => !t.completed)
  : filter === 'completed' ? todos.filter(t => t.completed)
  : todos;

What does each filter return?",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::PredictOutput,
      "🔍 What Does This Filter Return?",
      "Predict the result of each filter:",
    )
    .code(code)
    .expect(
      "Active: Walk dog, Code app. Completed: Buy milk, Sleep. All: all 4.",
      &[
        "Active: Buy milk, Sleep. Completed: Walk dog, Code app. All: all 4.",
        "Active: Walk dog, Code app. Completed: Buy milk, Sleep. All: only active ones.",
        "Active: Walk dog. Completed: Buy milk. All: 2.",
      ],
    )
    .concepts(&["filter", "array methods", "boolean logic", "derived state"])
    .rewards(35, 10)
  }
}

pub(super) mod brain_4 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🚨 Error Handling Strategy",
      DecisionCategory::QualityTradeoff,
      "The network just failed while saving a todo.

What does the user see?

A) The raw error: \"TypeError: Failed to fetch\"
B) A friendly message: \"Couldn't save. Check your connection.\"
C) Nothing, the app retries quietly in the background

QA filed 12 tickets titled \"weird red text\"."
        .to_string(),
      vec![
        option(
          "technical-errors",
          "Show the technical error",
          "console.error and the raw message",
          Consequences::new().sanity(10).coffee(5).xp(15).tech_debt(15).code_quality(-15),
          false,
          "Users can't act on stack traces. They just feel broken.",
        ),
        option(
          "friendly-errors",
          "Friendly messages",
          "Human language plus a retry button",
          Consequences::new().sanity(0).coffee(-5).xp(40).tech_debt(-5).code_quality(20),
          true,
          "Users know what happened and what to do next.",
        ),
        option(
          "auto-retry",
          "Automatic retry with backoff",
          "Retry quietly, surface only persistent failures",
          Consequences::new().sanity(-10).coffee(-15).xp(45).tech_debt(-10).code_quality(25),
          ctx.is(PlayerClass::Architect),
          "Resilient, but harder to build and test.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "Future<void> addTodo(String title) async {
  try {
    await repo.add(title);
  } catch (e) {
    print(e);
  }
}

// What does the user see when this fails?
// How would you improve it?",
      "async function addTodo(title) {
  try {
    await api.post('/todos', { title });
  } catch (e) {
    console.log(e);
  }
}

// What does the user see when this fails?
// How would you improve it?",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🚨 Improve This Error Handling",
      "This code swallows errors. How would you fix it?",
    )
    .code(code)
    .concepts(&["error handling", "user feedback", "retry", "error messages"])
    .rewards(40, 15)
  }
}

pub(super) mod brain_5 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🧪 Testing Philosophy",
      DecisionCategory::QualityTradeoff,
      "The app works. Time to write tests?

The PM: \"Tests don't ship features.\"
Your future self at 2am: \"Please write tests.\"

How much testing do you do?"
        .to_string(),
      vec![
        option(
          "no-tests",
          "No tests",
          "It works on my machine",
          Consequences::new().sanity(15).coffee(10).xp(5).tech_debt(40).code_quality(-30),
          false,
          "Every future change becomes a gamble.",
        ),
        option(
          "critical-tests",
          "Test the critical paths",
          "Add, toggle, delete, filter",
          Consequences::new().sanity(0).coffee(-10).xp(40).tech_debt(-10).code_quality(25),
          true,
          "Covers what users actually do. High value, modest cost.",
        ),
        option(
          "full-coverage",
          "100% coverage",
          "Every branch, every widget",
          Consequences::new().sanity(-25).coffee(-30).xp(30).tech_debt(-20).code_quality(15),
          ctx.is(PlayerClass::Architect),
          "Thorough, but the last 20% of coverage costs the most.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "testWidgets('adds a todo', (tester) async {
  await tester.pumpWidget(const MyApp());

  await tester.enterText(find.byType(TextField), 'Buy milk');
  await tester.tap(find.byIcon(Icons.add));
  await tester.pump();

  expect(find.text('Buy milk'), findsOneWidget);
});",
      "test('adds a todo', async () => {
  render(<App />);

  await userEvent.type(screen.getByPlaceholderText('Add todo...'), 'Buy milk');
  await userEvent.click(screen.getByRole('button', { name: /add/i }));

  expect(screen.getByText('Buy milk')).toBeInTheDocument();
});",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🧪 What Does This Test Check?",
      "Explain what this test verifies and what it does not:",
    )
    .code(code)
    .concepts(&["unit test", "integration test", "assertions", "test coverage"])
    .rewards(40, 15)
  }
}

pub(super) mod prod_4 {
  use super::*;

  pub fn decision(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> DecisionPoint {
    step_decision(
      step,
      "🚀 Deployment Strategy",
      DecisionCategory::TechnicalChoice,
      "Ship it! But where?

A) Free tier hosting (Vercel, Netlify, Firebase Hosting)
B) A cloud provider (AWS, GCP, Azure)
C) Your own server in the closet

Your budget: $0. Your users: 12 friends."
        .to_string(),
      vec![
        option(
          "free-tier",
          "Free tier hosting",
          ctx.by_framework("Firebase Hosting", "Vercel / Netlify"),
          Consequences::new().sanity(15).coffee(10).xp(35).tech_debt(0),
          true,
          "Git push and it's live. Perfect for this scale.",
        ),
        option(
          "cloud-provider",
          "Cloud provider",
          "Containers, load balancers, IAM roles",
          Consequences::new().sanity(-15).coffee(-20).xp(30).tech_debt(-5),
          false,
          "Powerful, but a lot of setup for 12 users.",
        ),
        option(
          "self-hosted",
          "Self-hosted",
          "Your hardware, your problem",
          Consequences::new().sanity(-25).coffee(-25).xp(40).tech_debt(10),
          ctx.is(PlayerClass::Architect),
          "You'll learn a lot. You'll also be on call.",
        ),
      ],
    )
  }

  pub fn verification(step: &CurriculumStep, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
    let code = ctx.by_framework(
      "{
  \"hosting\": {
    \"public\": \"build/web\",
    \"ignore\": [\"firebase.json\", \"**/.*\"],
    \"rewrites\": [
      { \"source\": \"**\", \"destination\": \"/index.html\" }
    ],
    \"headers\": [
      {
        \"source\": \"**\",
        \"headers\": [{ \"key\": \"X-Frame-Options\", \"value\": \"DENY\" }]
      }
    ]
  }
}",
      "{
  \"rewrites\": [
    { \"source\": \"/(.*)\", \"destination\": \"/index.html\" }
  ],
  \"headers\": [
    {
      \"source\": \"/(.*)\",
      \"headers\": [{ \"key\": \"X-Frame-Options\", \"value\": \"DENY\" }]
    }
  ]
}",
    );
    VerificationChallenge::new(
      verify_id(step),
      VerificationMode::ExplainCode,
      "🚀 Explain This Deploy Config",
      "What does this deployment configuration do?",
    )
    .code(code)
    .concepts(&["deployment", "hosting", "SPA routing", "security headers"])
    .rewards(40, 15)
  }
}
