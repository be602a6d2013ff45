pub const HOME_STYLES: &str = r#"
/* Header and navigation */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--header-height);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.header .container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--graphite);
}

.nav-menu {
  display: flex;
  gap: var(--space-6);
  list-style: none;
}

.nav-menu a {
  color: var(--text-secondary);
  font-weight: 500;
}

.nav-menu a:hover {
  color: var(--primary);
  text-decoration: none;
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  border: none;
  background: none;
  cursor: pointer;
}

.nav-toggle span {
  display: block;
  width: 24px;
  height: 2px;
  background-color: var(--graphite);
  transition: transform var(--transition-fast) var(--easing-standard);
}

.nav-toggle.active span:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.nav-toggle.active span:nth-child(2) {
  opacity: 0;
}

.nav-toggle.active span:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-menu {
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: var(--space-6);
    background-color: var(--surface);
    box-shadow: var(--shadow-md);
    transform: translateY(-150%);
    transition: transform var(--transition-normal) var(--easing-standard);
  }

  .nav-menu.active {
    transform: translateY(0);
  }
}

/* Sections */
main {
  padding-top: var(--header-height);
}

.section {
  padding: var(--space-16) 0;
}

.section-alt {
  background-color: var(--surface-alt);
}

.section-title {
  margin-bottom: var(--space-8);
  font-size: 2rem;
  text-align: center;
  color: var(--graphite);
}

.hero {
  padding: var(--space-16) 0;
  text-align: center;
  background: linear-gradient(135deg, var(--primary-dark), var(--primary));
  color: var(--text-inverse);
}

.hero h1 {
  font-size: 2.75rem;
  margin-bottom: var(--space-4);
}

.hero p {
  max-width: 640px;
  margin: 0 auto var(--space-8);
  font-size: 1.125rem;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-6);
}

.benefit-card,
.service-card,
.project-card,
.testimonial-card,
.process-step,
.value-card,
.why-us-card {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.project-card h3 {
  margin-bottom: var(--space-2);
}

.project-card p {
  margin-bottom: var(--space-4);
  color: var(--text-secondary);
}

.testimonial-card cite {
  display: block;
  margin-top: var(--space-3);
  font-weight: 600;
}

/* Reveal on scroll */
.benefit-card, .service-card, .project-card, .testimonial-card,
.process-step, .value-card, .why-us-card {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.benefit-card.animate-in, .service-card.animate-in, .project-card.animate-in,
.testimonial-card.animate-in, .process-step.animate-in, .value-card.animate-in,
.why-us-card.animate-in {
  opacity: 1;
  transform: translateY(0);
}

/* Carousel */
.carousel-container {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-lg);
}

.carousel-slide {
  display: flex;
  width: 500%;
  transition: transform 0.5s ease;
}

.carousel-item {
  flex: 0 0 20%;
}

.carousel-item img {
  display: block;
  width: 100%;
  aspect-ratio: 16/9;
  object-fit: cover;
}

.carousel-prev,
.carousel-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 44px;
  height: 44px;
  border: none;
  border-radius: var(--radius-full);
  background-color: rgba(255, 255, 255, 0.85);
  font-size: 1.5rem;
  cursor: pointer;
}

.carousel-prev {
  left: var(--space-4);
}

.carousel-next {
  right: var(--space-4);
}

.carousel-dots {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.carousel-dot {
  width: 12px;
  height: 12px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--neutral-300);
  cursor: pointer;
}

.carousel-dot.active {
  background-color: var(--primary);
}

/* Social and floating buttons */
.social-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-6);
}

.social-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-width: 160px;
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  color: var(--graphite);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.social-card:hover {
  text-decoration: none;
}

.floating-buttons {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  z-index: 60;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.floating-btn {
  display: flex;
  width: 56px;
  height: 56px;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  background-color: var(--green);
  color: var(--text-inverse);
  font-size: 1.5rem;
  box-shadow: var(--shadow-lg);
  transition: transform var(--transition-fast) var(--easing-standard);
}

.floating-btn:hover {
  text-decoration: none;
}

/* Footer */
.footer {
  padding: var(--space-8) 0;
  background-color: var(--graphite);
  color: var(--neutral-300);
  text-align: center;
}

.not-found {
  padding: var(--space-16) 0;
  text-align: center;
}
"#;
