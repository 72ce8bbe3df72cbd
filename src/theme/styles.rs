//! Global CSS styles for PensionGuardian.
//!
//! Light, glassy government-portal look. Colors come from the `:root`
//! properties emitted by `colors::root_properties`.

pub const GLOBAL_STYLES: &str = r#"
/* === Layout Tokens === */
:root {
  --radius: 0.75rem;
  --radius-sm: 0.5rem;
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --sidebar-width: 16rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100vh;
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }
ul { list-style: none; }
h1 { font-size: 1.875rem; font-weight: 700; letter-spacing: -0.02em; }
h2 { font-size: 1.25rem; font-weight: 600; }
h3 { font-size: 1rem; font-weight: 600; }

/* === Animation === */
@keyframes fade-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes blink {
  0%, 100% { filter: brightness(1); }
  50% { filter: brightness(0.85); }
}

@keyframes mouth {
  0%, 100% { transform: scaleY(1); }
  50% { transform: scaleY(1.02); }
}

@keyframes head {
  0%, 100% { transform: rotate(0deg); }
  25% { transform: rotate(-2deg); }
  75% { transform: rotate(2deg); }
}

.fade-in { animation: fade-in 500ms ease-out both; }
.delay-200 { animation-delay: 200ms; }
.delay-400 { animation-delay: 400ms; }
.delay-600 { animation-delay: 600ms; }
.animate-blink { animation: blink 1s ease-in-out infinite; }
.animate-mouth { animation: mouth 1.2s ease-in-out infinite; }
.animate-head { animation: head 1.6s ease-in-out infinite; }

/* === Surfaces === */
.glass {
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(12px);
  border: 1px solid var(--border);
  box-shadow: var(--shadow);
}

.card-hover { transition: transform var(--transition-normal), box-shadow var(--transition-normal); }
.card-hover:hover { transform: translateY(-4px); box-shadow: 0 16px 40px rgba(15, 23, 42, 0.12); }

.page-backdrop {
  position: fixed;
  inset: 0;
  z-index: -1;
  background:
    radial-gradient(var(--border) 1px, transparent 1px) 0 0 / 20px 20px,
    linear-gradient(135deg, #eff6ff, #eef2ff);
}

/* === Logo === */
.logo { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; letter-spacing: -0.02em; }
.logo-sm { font-size: 1.25rem; }
.logo-md { font-size: 1.5rem; }
.logo-lg { font-size: 1.875rem; }
.logo-shield { color: var(--primary); }
.logo-primary { color: var(--primary); }
.logo-secondary { color: var(--foreground); }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: 1px solid transparent;
  border-radius: var(--radius-sm);
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}
.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-primary { background: var(--primary); color: white; }
.btn-primary:hover:not(:disabled) { background: var(--primary-deep); }
.btn-outline { background: var(--card); border-color: var(--border); color: var(--foreground); }
.btn-outline:hover:not(:disabled) { background: var(--primary-soft); }
.btn-ghost { background: transparent; color: var(--foreground); }
.btn-ghost:hover:not(:disabled) { background: var(--primary-soft); color: var(--primary); }
.btn-link { background: none; color: var(--primary); padding: 0.25rem 0.5rem; }
.btn-link:hover { text-decoration: underline; }
.btn-link.muted { color: var(--muted); }
.btn-success { background: var(--success); color: white; }
.btn-danger { background: transparent; color: var(--danger); justify-content: flex-start; }
.btn-danger:hover { background: rgba(220, 38, 38, 0.1); }
.btn-lg { padding: 0.75rem 1.5rem; font-size: 1rem; }
.btn-sm { padding: 0.25rem 0.75rem; font-size: 0.8125rem; }
.btn-block { width: 100%; }
.btn-trailing { margin-left: 0.5rem; }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: var(--radius-sm);
  background: transparent;
  color: var(--muted);
  cursor: pointer;
}
.icon-btn:hover { background: var(--primary-soft); color: var(--primary); }

/* === Forms === */
.form-stack { display: flex; flex-direction: column; gap: 1rem; }
.form-field { display: flex; flex-direction: column; gap: 0.375rem; }
.input-label { font-size: 0.875rem; font-weight: 500; }
.input-wrapper { position: relative; display: flex; align-items: center; }
.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: var(--card);
  color: var(--foreground);
  font: inherit;
  font-size: 0.875rem;
}
.input-field:focus { outline: 2px solid var(--primary-soft); border-color: var(--primary); }
.input-field.invalid { border-color: var(--danger); }
.input-lg { font-size: 1.125rem; }
.tracking-wide { letter-spacing: 0.1em; }
.input-trailing { position: absolute; right: 0.25rem; }
.field-error { color: var(--danger); font-size: 0.8125rem; font-weight: 500; }
.form-links { display: flex; justify-content: center; gap: 0.5rem; }
.form-links.align-right { justify-content: flex-end; }
.demo-hint { margin-top: 1.5rem; text-align: center; font-size: 0.75rem; color: var(--muted); }

.search-input-wrapper, .select-wrapper { position: relative; display: flex; align-items: center; }
.search-icon, .select-icon { position: absolute; left: 0.625rem; font-size: 0.875rem; color: var(--muted); pointer-events: none; }
.search-input, .select { padding-left: 2rem; }

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  padding: 0.125rem 0.625rem;
  border: 1px solid transparent;
  border-radius: 999px;
  background: var(--primary);
  color: white;
  font-size: 0.75rem;
  font-weight: 600;
  white-space: nowrap;
}
.badge-outline { background: transparent; border-color: var(--border); color: var(--foreground); }
.badge-destructive { background: var(--danger); }
.badge-success { background: rgba(22, 163, 74, 0.12); color: var(--success); }
.badge-warning { background: rgba(217, 119, 6, 0.12); color: var(--warning); }

/* === Progress === */
.progress-track { width: 100%; height: 0.5rem; overflow: hidden; border-radius: 999px; background: var(--border); }
.progress-fill { height: 100%; border-radius: 999px; background: var(--primary); transition: width 500ms ease-out; }
.progress-fill.success { background: var(--success); }
.progress-fill.warning { background: var(--warning); }
.progress-fill.light { background: white; transition: width 100ms linear; }

.step-track { display: flex; flex-direction: column; gap: 0.5rem; }
.step-track-labels { display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--muted); }
.step-label.reached { color: var(--primary); font-weight: 600; }

/* === Cards === */
.card { border-radius: var(--radius); overflow: hidden; }
.card-warn { border-color: #fcd34d; }
.card-header { padding: 1.5rem 1.5rem 0.75rem; }
.card-title-row { display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
.card-title { font-size: 1.125rem; }
.card-description { margin-top: 0.25rem; font-size: 0.875rem; color: var(--muted); }
.card-content { padding: 0.75rem 1.5rem 1.5rem; }
.card-footer { padding: 0 1.5rem 1.5rem; }
.table-card .card-content { padding: 0; }

.stat-card { padding: 1.25rem 1.5rem; }
.stat-label { font-size: 0.875rem; font-weight: 500; color: var(--muted); }
.stat-row { display: flex; align-items: center; justify-content: space-between; margin-top: 0.5rem; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-icon { display: flex; align-items: center; justify-content: center; width: 3rem; height: 3rem; border-radius: 999px; font-size: 1.25rem; }
.stat-icon.primary, .activity-icon.primary { background: var(--primary-soft); color: var(--primary); }
.stat-icon.success, .activity-icon.success { background: rgba(22, 163, 74, 0.12); color: var(--success); }
.stat-icon.warning, .activity-icon.warning { background: rgba(217, 119, 6, 0.12); color: var(--warning); }
.stat-icon.danger, .activity-icon.danger { background: rgba(220, 38, 38, 0.12); color: var(--danger); }
.activity-icon.info { background: rgba(2, 132, 199, 0.12); color: var(--info); }

/* === Landing === */
.landing, .not-found, .auth-page {
  position: relative;
  display: flex;
  min-height: 100vh;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem 1rem;
}
.landing-logo, .auth-logo { margin-bottom: 2rem; }
.landing-hero { max-width: 48rem; text-align: center; }
.hero-title { margin-bottom: 1rem; font-size: 3rem; line-height: 1.1; }
.hero-line { display: block; }
.gradient-text {
  background: linear-gradient(90deg, var(--primary), var(--primary-deep));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}
.hero-tagline { margin-bottom: 2rem; font-size: 1.125rem; color: var(--muted); }
.landing-actions { display: flex; width: 100%; max-width: 28rem; gap: 1rem; }
.feature-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; max-width: 56rem; margin-top: 4rem; }
.feature-tile { padding: 1.5rem; border-radius: var(--radius); text-align: center; }
.feature-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  margin: 0 auto 1rem;
  border-radius: 999px;
  background: var(--primary-soft);
  color: var(--primary);
  font-size: 1.25rem;
}
.feature-title { margin-bottom: 0.5rem; font-size: 1.125rem; }
.feature-body { font-size: 0.875rem; color: var(--muted); }

/* === Not Found === */
.not-found-body { text-align: center; }
.not-found-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 6rem;
  height: 6rem;
  margin: 0 auto 1.5rem;
  border-radius: 999px;
  background: rgba(220, 38, 38, 0.08);
  color: var(--danger);
  font-size: 2.5rem;
}
.not-found-code { margin-bottom: 0.5rem; font-size: 2.25rem; }
.not-found-text { margin-bottom: 0.5rem; font-size: 1.125rem; color: var(--muted); }
.not-found-path { margin-bottom: 1.5rem; font-size: 0.875rem; color: var(--muted); }

/* === Auth Card === */
.auth-card { width: 100%; max-width: 28rem; padding: 1.5rem; }
.auth-heading { margin-bottom: 1.5rem; text-align: center; }
.auth-title { font-size: 1.5rem; font-weight: 600; }
.auth-subtitle { margin-top: 0.5rem; font-size: 0.875rem; color: var(--muted); }
.admin-badge { display: flex; justify-content: center; margin-bottom: 1.5rem; }
.admin-badge-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 999px;
  background: var(--primary-soft);
  font-size: 1.5rem;
}

/* === Verification Flows === */
.flow-stack { display: flex; flex-direction: column; gap: 1.5rem; }
.flow-actions { display: flex; justify-content: center; }
.guidelines {
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  font-size: 0.875rem;
  color: var(--muted);
}
.guidelines h3 { margin-bottom: 0.5rem; color: var(--foreground); font-size: 0.875rem; }
.guidelines ul { list-style: disc inside; display: flex; flex-direction: column; gap: 0.25rem; }

.webcam-container {
  position: relative;
  overflow: hidden;
  aspect-ratio: 4 / 3;
  border-radius: var(--radius);
  background: #0f172a;
}
.webcam-video { width: 100%; height: 100%; object-fit: cover; transform: scaleX(-1); }
.webcam-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: flex-end;
  padding: 1rem;
}
.face-oval {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 55%;
  height: 75%;
  transform: translate(-50%, -50%);
  border: 2px dashed rgba(255, 255, 255, 0.7);
  border-radius: 50%;
  pointer-events: none;
}
.instruction-box {
  position: relative;
  width: 100%;
  padding: 0.75rem 1rem;
  border-radius: var(--radius-sm);
  background: rgba(15, 23, 42, 0.7);
  color: white;
  font-size: 0.875rem;
  text-align: center;
}
.instruction-box.success { display: flex; align-items: center; justify-content: center; gap: 0.5rem; background: rgba(22, 163, 74, 0.8); }
.instruction-lead { margin-bottom: 0.5rem; }
.instruction-row { display: flex; align-items: center; justify-content: center; gap: 0.5rem; }
.recording-track { height: 0.25rem; margin-top: 0.5rem; overflow: hidden; border-radius: 999px; background: rgba(255, 255, 255, 0.2); }
.recording-fill { height: 100%; background: white; transition: width 50ms linear; }

/* === Dashboard Shell === */
.dashboard-shell { display: flex; min-height: 100vh; }
.sidebar {
  position: fixed;
  inset: 0 auto 0 0;
  display: flex;
  width: var(--sidebar-width);
  flex-direction: column;
  padding: 1.5rem 0.5rem;
  border-right: 1px solid var(--border);
  background: var(--card);
}
.sidebar-logo { margin-bottom: 2rem; padding: 0 1rem; }
.sidebar-nav { flex: 1; }
.sidebar-nav ul { display: flex; flex-direction: column; gap: 0.5rem; padding: 0 0.5rem; }
.nav-link {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: var(--radius-sm);
  font-size: 0.875rem;
  font-weight: 500;
}
.nav-link:hover { color: var(--primary); background: var(--primary-soft); }
.nav-link.active { background: var(--primary); color: white; }
.nav-icon { width: 1.25rem; text-align: center; }
.sidebar-footer { padding: 0 0.5rem 1.5rem; }
.dashboard-main { flex: 1; padding-left: var(--sidebar-width); }
.dashboard-content { max-width: 80rem; margin: 0 auto; padding: 1.5rem; }

/* === Dashboard Content === */
.page-section { margin-bottom: 2rem; }
.page-heading { margin-bottom: 2rem; }
.page-heading p, .muted-text { color: var(--muted); font-size: 0.875rem; }
.section-gap { margin-bottom: 1.5rem; }
.two-column, .detail-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.stat-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.filter-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.detail-block + .detail-block { margin-top: 1rem; }
.detail-label { margin-bottom: 0.25rem; font-size: 0.875rem; font-weight: 500; color: var(--muted); }
.detail-value { display: flex; align-items: center; gap: 0.5rem; font-weight: 500; }
.detail-icon { color: var(--primary); }
.detail-icon.success { color: var(--success); }
.detail-icon.warning { color: var(--warning); }

.document-list { display: flex; flex-direction: column; gap: 0.5rem; }
.document-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
}
.document-name { flex: 1; }

.activity-list { display: flex; flex-direction: column; gap: 0.25rem; }
.activity-row { display: flex; align-items: flex-start; gap: 1rem; padding: 0.5rem; border-radius: var(--radius-sm); }
.activity-row:hover { background: var(--primary-soft); }
.activity-row.spread { align-items: center; justify-content: space-between; flex-wrap: wrap; }
.activity-who, .activity-meta { display: flex; align-items: center; gap: 0.75rem; }
.activity-icon {
  display: flex;
  flex-shrink: 0;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 999px;
}
.activity-title { font-size: 0.875rem; font-weight: 500; }
.activity-time { font-size: 0.75rem; color: var(--muted); }

.tabs-header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.tab-list { display: inline-flex; gap: 0.25rem; padding: 0.25rem; border-radius: var(--radius-sm); background: var(--border); }
.tab {
  padding: 0.375rem 0.75rem;
  border: none;
  border-radius: 0.375rem;
  background: transparent;
  color: var(--muted);
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
}
.tab.active { background: var(--card); color: var(--foreground); box-shadow: 0 1px 2px rgba(15, 23, 42, 0.1); }

.rate-row { display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.5rem; }
.rate-value { font-size: 1.5rem; font-weight: 700; }

/* === Table === */
.table-scroll { overflow-x: auto; }
.data-table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.data-table th {
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--border);
  color: var(--muted);
  font-weight: 500;
  text-align: left;
}
.data-table td { padding: 0.75rem 1rem; border-bottom: 1px solid var(--border); vertical-align: middle; }
.data-table .align-right, .cell-actions { text-align: right; }
.col-id { width: 100px; }
.cell-strong { font-weight: 500; }
.cell-sub { font-size: 0.75rem; color: var(--muted); }
.cell-stack { display: flex; flex-direction: column; }
.empty-row { height: 6rem; text-align: center; color: var(--muted); }

.row-menu { position: relative; display: inline-block; }
.menu-panel {
  position: absolute;
  top: 100%;
  right: 0;
  z-index: 20;
  min-width: 12rem;
  padding: 0.25rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: var(--card);
  box-shadow: var(--shadow);
  text-align: left;
}
.menu-panel hr { margin: 0.25rem 0; border: none; border-top: 1px solid var(--border); }
.menu-label { padding: 0.375rem 0.5rem; font-size: 0.75rem; font-weight: 600; }
.menu-item {
  display: block;
  width: 100%;
  padding: 0.375rem 0.5rem;
  border: none;
  border-radius: 0.25rem;
  background: none;
  font: inherit;
  font-size: 0.875rem;
  text-align: left;
  cursor: pointer;
}
.menu-item:hover { background: var(--primary-soft); }
.menu-item.danger { color: var(--danger); }

/* === Toasts === */
.toast-region {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  z-index: 100;
  display: flex;
  width: 24rem;
  flex-direction: column;
  gap: 0.5rem;
}
.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: var(--card);
  box-shadow: var(--shadow);
  animation: fade-in 300ms ease-out both;
}
.toast.destructive { border-color: var(--danger); background: var(--danger); color: white; }
.toast-body { flex: 1; }
.toast-title { font-size: 0.875rem; font-weight: 600; }
.toast-description { font-size: 0.875rem; opacity: 0.9; }
.toast-close { border: none; background: none; color: inherit; font-size: 1.125rem; cursor: pointer; opacity: 0.6; }
.toast-close:hover { opacity: 1; }

/* === Responsive === */
@media (max-width: 768px) {
  .feature-grid, .two-column, .detail-grid, .filter-grid { grid-template-columns: 1fr; }
  .stat-grid { grid-template-columns: repeat(2, 1fr); }
  .landing-actions { flex-direction: column; }
  .hero-title { font-size: 2.25rem; }
  .sidebar { position: static; width: 100%; }
  .dashboard-shell { flex-direction: column; }
  .dashboard-main { padding-left: 0; }
}
"#;
