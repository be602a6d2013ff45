pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #2563EB;
  --primary-light: #60A5FA;
  --primary-dark: #1E40AF;
  --green: #10B981;
  --graphite: #1F2937;
  --light-gray: #F3F4F6;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-900: #111827;

  --error: #EF4444;
  --success: #10B981;

  --background: #FFFFFF;
  --surface: #FFFFFF;
  --surface-alt: var(--neutral-50);

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  --border: var(--neutral-300);

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
